//! Benchlink CLI library.
//!
//! Argument parsing, layered configuration and command execution for the
//! `benchlink` binary. Results go to stdout or a JSON file; logs and run
//! summaries go to stderr.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
