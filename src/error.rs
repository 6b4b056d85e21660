//! Error types for scenario validation and catalog I/O

use thiserror::Error;

/// Type alias for Result using [`ScenarioError`].
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// A scenario field that cannot be projected.
///
/// `field` is a dotted path into the scenario, e.g. `currentAssets[2].value`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: String, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: f64 },

    #[error("{field} must be between 1 and 10, got {value}")]
    ScoreOutOfRange { field: String, value: u8 },

    #[error("projection horizon of {years} years exceeds the maximum of {max}")]
    HorizonTooLong { years: u32, max: u32 },

    #[error("age {current_age} plus {years} years exceeds the maximum age of {max}")]
    AgeOutOfRange { current_age: u32, years: u32, max: u32 },
}

/// Root error type for the crate
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Invalid scenario: {0}")]
    Validation(#[from] ValidationError),

    #[error("Scenario '{0}' not found in catalog")]
    NotFound(String),

    #[error("Duplicate scenario id '{0}'")]
    DuplicateId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid asset row {row}: {message}")]
    AssetRow { row: usize, message: String },
}
