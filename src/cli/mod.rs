//! CLI module
//!
//! Singer command-line interface.
//!
//! # Modes
//!
//! - `--discover` - Print the catalog built from the API schema
//! - default - Sync the selected streams as Singer messages on stdout

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
