//! Error types for the identity engine

use thiserror::Error;

/// Result type for hueprint operations
pub type Result<T> = std::result::Result<T, HueprintError>;

/// Errors raised at the boundary of the engine.
///
/// The derivations themselves are total; these only surface when converting
/// untrusted input into engine types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HueprintError {
    /// Hue could not be parsed or was not a finite number
    #[error("invalid hue: {value}")]
    InvalidHue { value: String },

    /// Requested pattern size was zero
    #[error("invalid pattern size {size}: must be greater than zero")]
    InvalidSize { size: u32 },

    /// Pattern kind name not recognized
    #[error("unknown pattern kind: {name}")]
    UnknownPatternKind { name: String },
}

impl HueprintError {
    /// Create an invalid hue error
    pub fn invalid_hue(value: impl ToString) -> Self {
        Self::InvalidHue {
            value: value.to_string(),
        }
    }

    /// Create an unknown pattern kind error
    pub fn unknown_pattern_kind(name: impl Into<String>) -> Self {
        Self::UnknownPatternKind { name: name.into() }
    }
}
