//! # Error Types
//!
//! The error taxonomy for every weapon operation.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  armory-core errors (this file)                                        │
//! │  ├── ValidationError  - a field rule was violated                      │
//! │  ├── StoreError       - the store could not complete (cause attached)  │
//! │  └── WeaponError      - what a service operation returns               │
//! │       ├── Validation(ValidationError)                                  │
//! │       ├── NotFound { id, operation }                                   │
//! │       ├── Unmodifiable { id, operation }                               │
//! │       └── Storage(StoreError)                                          │
//! │                                                                         │
//! │  armory-db errors (separate crate)                                     │
//! │  └── DbError          - converted into StoreError at the trait edge    │
//! │                                                                         │
//! │  Flow: DbError → StoreError → WeaponError → boundary layer             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty criteria search is NOT in this list: it is a successful
//! [`ListOutcome::NoCriteriaMatch`](crate::service::ListOutcome).
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the weapon ID in every message
//! 3. Callers switch on [`WeaponError::kind`], never on message text

use std::fmt;

use thiserror::Error;

use crate::types::WeaponId;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any mutation is attempted, so a validation failure never
/// leaves a partial write behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Invalid format (e.g., an image URL that is not a qualified domain).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// A failure inside a [`WeaponStore`](crate::store::WeaponStore).
///
/// The service never looks inside; it only forwards this as
/// [`WeaponError::Storage`]. The lower-level error is kept as the
/// [`source`](std::error::Error::source).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl StoreError {
    /// Creates a store error with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a store error wrapping the underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

// =============================================================================
// Weapon Error
// =============================================================================

/// The operation that failed, used to phrase messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Update,
    Patch,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Search => "Search",
            // Patch is a partial update; users see both as "Update"
            Operation::Update | Operation::Patch => "Update",
            Operation::Delete => "Delete",
        };
        f.write_str(verb)
    }
}

/// Errors returned by [`WeaponService`](crate::service::WeaponService).
#[derive(Debug, Error)]
pub enum WeaponError {
    /// Caller-supplied data violates a field rule.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No weapon exists at that ID.
    ///
    /// ## When This Occurs
    /// - get/update/patch/delete of an unknown ID
    /// - Always wins over `Unmodifiable`: existence is checked first
    #[error("{operation} failed as a weapon with ID #{id} does not exist.")]
    NotFound { id: WeaponId, operation: Operation },

    /// The weapon exists but is frozen (`modifiable = false`).
    ///
    /// ## User Workflow
    /// ```text
    /// PATCH weapon #5 { name: "New Name" }
    ///      │
    ///      ▼
    /// exists? ── yes ──► modifiable? ── no ──► Unmodifiable { id: 5 }
    ///                                             (nothing written)
    /// ```
    #[error("The weapon with ID #{id} could not be modified. You may not {verb} weapons that are marked as unmodifiable.", verb = unmodifiable_verb(.operation))]
    Unmodifiable { id: WeaponId, operation: Operation },

    /// The store could not complete the operation.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

fn unmodifiable_verb(operation: &Operation) -> &'static str {
    match operation {
        Operation::Delete => "delete",
        _ => "modify",
    }
}

/// Error kind, for boundary layers that map failures to a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ValidationFailure,
    EntityNotFound,
    Unmodifiable,
    StorageFailure,
}

impl ErrorKind {
    /// Conventional HTTP status for this kind.
    ///
    /// A hint for REST boundary layers; this crate never speaks HTTP.
    pub const fn status_hint(&self) -> u16 {
        match self {
            ErrorKind::ValidationFailure | ErrorKind::Unmodifiable => 400,
            ErrorKind::EntityNotFound => 404,
            ErrorKind::StorageFailure => 500,
        }
    }
}

impl WeaponError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeaponError::Validation(_) => ErrorKind::ValidationFailure,
            WeaponError::NotFound { .. } => ErrorKind::EntityNotFound,
            WeaponError::Unmodifiable { .. } => ErrorKind::Unmodifiable,
            WeaponError::Storage(_) => ErrorKind::StorageFailure,
        }
    }

    pub(crate) fn not_found(id: WeaponId, operation: Operation) -> Self {
        WeaponError::NotFound { id, operation }
    }

    pub(crate) fn unmodifiable(id: WeaponId, operation: Operation) -> Self {
        WeaponError::Unmodifiable { id, operation }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for service results.
pub type WeaponResult<T> = Result<T, WeaponError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooShort {
            field: "name",
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters");
        assert_eq!(err.field(), "name");

        let err = ValidationError::Required {
            field: "primaryAttackType",
        };
        assert_eq!(err.to_string(), "primaryAttackType is required");
    }

    #[test]
    fn test_weapon_error_messages() {
        let err = WeaponError::not_found(999, Operation::Delete);
        assert_eq!(
            err.to_string(),
            "Delete failed as a weapon with ID #999 does not exist."
        );

        let err = WeaponError::not_found(7, Operation::Patch);
        assert_eq!(
            err.to_string(),
            "Update failed as a weapon with ID #7 does not exist."
        );

        let err = WeaponError::unmodifiable(5, Operation::Delete);
        assert_eq!(
            err.to_string(),
            "The weapon with ID #5 could not be modified. You may not delete weapons that are marked as unmodifiable."
        );
    }

    #[test]
    fn test_kinds_and_status_hints() {
        let validation: WeaponError = ValidationError::Required { field: "name" }.into();
        assert_eq!(validation.kind(), ErrorKind::ValidationFailure);
        assert_eq!(validation.kind().status_hint(), 400);

        assert_eq!(
            WeaponError::not_found(1, Operation::Search).kind().status_hint(),
            404
        );
        assert_eq!(
            WeaponError::unmodifiable(1, Operation::Update).kind(),
            ErrorKind::Unmodifiable
        );
    }

    #[test]
    fn test_store_error_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: WeaponError = StoreError::with_source("could not persist weapon", cause).into();

        assert_eq!(err.kind(), ErrorKind::StorageFailure);
        assert_eq!(err.to_string(), "Storage error: could not persist weapon");

        let store_err = err.source().expect("store error is the source");
        let io_err = store_err.source().expect("io error is kept");
        assert_eq!(io_err.to_string(), "disk full");
    }
}
