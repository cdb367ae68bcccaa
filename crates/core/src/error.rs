//! Errors raised by record validation and edits.
//!
//! Reads never fail: an unknown id yields zero totals or an empty list. Only
//! constructing or upserting a record can produce a [`DomainError`].

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field is out of range or malformed (name too short, zero price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Fields are individually fine but inconsistent with each other.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An id was empty or contained whitespace.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An edit references a record that does not exist.
    #[error("unknown {kind} {id}")]
    UnknownReference { kind: &'static str, id: String },

    /// Two records in one edit share an id.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unknown(kind: &'static str, id: impl ToString) -> Self {
        Self::UnknownReference {
            kind,
            id: id.to_string(),
        }
    }
}
