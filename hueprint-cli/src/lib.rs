//! hueprint CLI library.
//!
//! The binary parses arguments, loads [`HueprintConfig`], sets up logging and
//! hands off to [`commands::run`]. All file and environment access lives here,
//! keeping the `hueprint` engine crate free of I/O.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Commands};
pub use config::{HueprintConfig, OutputFormat};
pub use error::{CliError, CliResult, EXIT_ERROR, EXIT_NO_MATCH, EXIT_SUCCESS};
