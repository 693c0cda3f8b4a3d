//! Domain error types

use crate::attribute::AttributeKind;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid choice '{input}' for the {kind} question")]
    InvalidChoice { kind: AttributeKind, input: String },

    #[error("No style answers to tally")]
    EmptyTally,
}

impl DomainError {
    /// Check if this error represents an unrecognized answer
    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, DomainError::InvalidChoice { .. })
    }
}
