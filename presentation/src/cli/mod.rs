//! Command-line interface: argument definitions and dispatch

pub mod args;
pub mod commands;
pub mod dispatch;
