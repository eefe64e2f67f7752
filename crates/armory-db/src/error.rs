//! # Database Error Types
//!
//! Error types for database operations and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (armory-core) ← DbError kept as the source                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WeaponError::Storage ← ErrorKind::StorageFailure for the caller       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use armory_core::StoreError;
use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging.
#[derive(Debug, Error)]
pub enum DbError {
    /// Row not found in the database.
    ///
    /// ## When This Occurs
    /// - `fetch_one` returns no rows
    /// - UPDATE/DELETE matched zero rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A NOT NULL, CHECK or UNIQUE constraint rejected the row.
    ///
    /// ## When This Occurs
    /// - A value bypassed validation and broke a column rule
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    ///
    /// ## When This Occurs
    /// - Invalid SQL in migration
    /// - A previously applied migration was edited (checksum mismatch)
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports e.g. "NOT NULL constraint failed: weapons.name"
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Hands a database failure to the lifecycle layer.
///
/// The `DbError` travels along as the source so logs can still show the
/// SQLite message.
impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        StoreError::with_source("weapon store operation failed", err)
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Configuration Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[test]
    fn test_pool_errors() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_store_error_keeps_db_error() {
        let store_err: StoreError = DbError::not_found("Weapon", 7).into();

        assert_eq!(store_err.message(), "weapon store operation failed");
        let source = store_err.source().expect("db error kept as source");
        assert_eq!(source.to_string(), "Weapon not found: 7");
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidValue {
            key: "ARMORY_DB_MAX_CONNECTIONS".to_string(),
            value: "many".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ARMORY_DB_MAX_CONNECTIONS: 'many'"
        );
    }
}
