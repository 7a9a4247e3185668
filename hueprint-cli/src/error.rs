//! Error handling for the hueprint CLI

use std::path::PathBuf;

use thiserror::Error;

/// Process exited normally
pub const EXIT_SUCCESS: i32 = 0;
/// Any failure
pub const EXIT_ERROR: i32 = 1;
/// `match` found no roster entry for the input
pub const EXIT_NO_MATCH: i32 = 2;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine rejected an input
    #[error(transparent)]
    Hueprint(#[from] hueprint::HueprintError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Configuration loaded but holds invalid values
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Size preset not defined in configuration
    #[error("unknown size preset: {name}")]
    UnknownPreset { name: String },

    /// Roster file could not be read
    #[error("failed to read roster {path}: {source}")]
    RosterRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No roster entry matched the typed input
    #[error("no assignee matches '{input}'")]
    NoMatch { input: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl CliError {
    /// Exit code the process should terminate with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoMatch { .. } => EXIT_NO_MATCH,
            _ => EXIT_ERROR,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let no_match = CliError::NoMatch { input: "xy".into() };
        assert_eq!(no_match.exit_code(), EXIT_NO_MATCH);
        assert_eq!(no_match.to_string(), "no assignee matches 'xy'");

        let preset = CliError::UnknownPreset {
            name: "huge".into(),
        };
        assert_eq!(preset.exit_code(), EXIT_ERROR);
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let err: CliError = hueprint::HueprintError::InvalidSize { size: 0 }.into();
        assert_eq!(
            err.to_string(),
            "invalid pattern size 0: must be greater than zero"
        );
    }
}
