//! Custom error types for the ice planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The planner core never surfaces these to
//! the user: storage and link failures are swallowed at the state layer. They
//! matter for the back-ends themselves and for the command-line front end.

use thiserror::Error;

/// The main error type for ice planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Persisted storage errors (read or write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Shareable link errors
    #[error("Link error: {0}")]
    Link(String),

    /// Share collaborator errors (platform share or clipboard)
    #[error("Share error: {0}")]
    Share(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown planner field name
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Create an "unknown field" error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownField(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ice planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
