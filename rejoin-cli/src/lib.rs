//! rejoin CLI library
//!
//! This library provides the command-line interface for the rejoin
//! shredded-document reassembly system.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{exit_code, CliError, CliResult};
