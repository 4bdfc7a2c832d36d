//! Command-line interface for dockd.

pub mod commands;

pub use commands::{Cli, Commands, execute, run};
