//! Store error taxonomy
//!
//! Every store operation surfaces one of three failure kinds, and callers are
//! expected to handle each distinctly: bad input, a missed identity lookup,
//! or a failed persistence collaborator. None of them are recovered locally.

use std::fmt;
use thiserror::Error;

/// Error type surfaced by every policy store operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed or constraint-violating input at creation
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Lookup by identity found no record
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The persistence collaborator could not complete the operation
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        StoreError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Storage error without an underlying source
    pub fn storage(message: impl Into<String>) -> Self {
        StoreError::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Storage error wrapping an underlying cause
    pub fn storage_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error indicates invalid input
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation { .. })
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Returns true if this error came from the persistence collaborator
    pub fn is_storage(&self) -> bool {
        matches!(self, StoreError::Storage { .. })
    }
}
