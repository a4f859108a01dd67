//! Papershelf CLI library
//!
//! Argument parsing, configuration, and output formatting for the
//! `papershelf` binary. The binary itself is a thin wrapper around
//! `papershelf-ingest`.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
