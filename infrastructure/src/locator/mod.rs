//! Tool locator adapters

mod dotnet_locator;

pub use dotnet_locator::DotNetToolLocator;
