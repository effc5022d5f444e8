//! Error types for Parkways Core

use crate::limits::ValidationError;
use thiserror::Error;

/// Result type alias using Parkways' Error
pub type Result<T> = std::result::Result<T, Error>;

/// Parkways error types
#[derive(Error, Debug)]
pub enum Error {
    /// A field received a value of the wrong kind
    #[error("{field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// A field's value failed a length constraint
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A field that may only be set once was reassigned
    #[error("{field} cannot be changed after initialization")]
    Immutable { field: &'static str },

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Unknown {field} reference: {name}")]
    UnknownReference { field: &'static str, name: String },

    #[error("Duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong kind of value (non-string, wrong entity type)
    Type,
    /// Value out of the allowed range
    Value,
    /// Write to a set-once field
    Immutability,
    /// Reference to something that does not exist or is ambiguous
    Lookup,
    /// Malformed input document
    Serialization,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::Type,
            Self::Validation(_) => ErrorKind::Value,
            Self::Immutable { .. } => ErrorKind::Immutability,
            Self::TripNotFound(_) | Self::UnknownReference { .. } | Self::DuplicateName { .. } => {
                ErrorKind::Lookup
            }
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }
}
