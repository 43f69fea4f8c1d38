//! Error types for the prompt generation pipeline.

use thiserror::Error;

/// Request validation errors.
///
/// These are the only errors `Pipeline::generate` can return. Every variant
/// reports all offending fields at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("user_profile.expertise is required")]
    MissingExpertise,

    #[error("Request does not match schema:\n{}", .0.join("\n"))]
    Schema(Vec<String>),
}

impl ValidationError {
    /// Names of the missing required fields, if this is a missing-field error.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            ValidationError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

/// Errors raised outside the pipeline core: configuration, I/O, CLI input.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid request document: {0}")]
    InvalidRequest(String),

    #[error("Failed to get user input: {0}")]
    InputFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
