//! Engine error types.

use thiserror::Error;

use crate::binder::FieldError;

/// Failure of a binder-level write pass.
#[derive(Debug, Error)]
pub enum WriteError {
    /// `write` was called with no business object loaded. API misuse,
    /// not a validation failure.
    #[error("no business object is loaded")]
    NoObjectLoaded,
    /// One or more bindings rejected their field value.
    #[error("{} binding(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
}
