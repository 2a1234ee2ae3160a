//! dotnet commands: descriptors, validated requests, serialization

pub mod entities;
pub mod request;
pub mod serializer;

pub use entities::{DotNetCommand, FlagPlacement};
pub use request::CommandRequest;
pub use serializer::serialize;
