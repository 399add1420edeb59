// Copyright 2025 Cowboy AI, LLC.

//! Error types for overlay composition

use thiserror::Error;

/// Errors that can occur while composing or rendering an overlay
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// Malformed input structure (duplicate term labels, length mismatches, bad universe)
    #[error("Configuration error: {reason}")]
    ConfigurationError {
        /// What was malformed
        reason: String,
    },

    /// Input derived from a different variable than the one being rendered
    #[error("Consistency error: {reason}")]
    ConsistencyError {
        /// Which label or curve did not belong
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for overlay operations
pub type VizResult<T> = Result<T, OverlayError>;

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        OverlayError::SerializationError(err.to_string())
    }
}

impl OverlayError {
    /// Create a configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        OverlayError::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Create a consistency error
    pub fn consistency(reason: impl Into<String>) -> Self {
        OverlayError::ConsistencyError {
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, OverlayError::ConfigurationError { .. })
    }

    /// Check if this is a consistency error
    pub fn is_consistency_error(&self) -> bool {
        matches!(self, OverlayError::ConsistencyError { .. })
    }
}
