//! Database error types
//!
//! Maps low-level SQLx failures onto meaningful variants and onto the
//! domain-facing `StoreError` taxonomy.

use settlement_kernel::StoreError;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Check or not-null constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored value could not be decoded into its domain type
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Missing configuration (e.g. DATABASE_URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic SQL error
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{} with id '{}' not found", entity, id))
    }

    /// Maps a SQLx error to the most specific variant available
    ///
    /// PostgreSQL error codes:
    /// https://www.postgresql.org/docs/current/errcodes-appendix.html
    pub fn from_sqlx(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23502" | "23514" => {
                            DatabaseError::ConstraintViolation(db_err.message().to_string())
                        }
                        _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_string())
                }
            }
            other => DatabaseError::QueryFailed(other.to_string()),
        }
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }
}

/// Surfaces database failures through the uniform store taxonomy
///
/// Identity misses become `NotFound`; every other database failure, including
/// constraint conflicts and timeouts, is a `Storage` error per the store
/// contract.
impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::NotFound(message) => StoreError::NotFound {
                entity_type: "record".to_string(),
                id: message,
            },
            other => StoreError::storage_with_source(other.to_string(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error = DatabaseError::from_sqlx(sqlx::Error::RowNotFound);
        assert!(error.is_not_found());
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let error = DatabaseError::from_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, DatabaseError::PoolExhausted));
    }

    #[test]
    fn test_store_error_conversion_keeps_taxonomy() {
        let not_found: StoreError = DatabaseError::not_found("DriverFeePolicy", 7).into();
        assert!(not_found.is_not_found());

        let storage: StoreError = DatabaseError::PoolExhausted.into();
        assert!(storage.is_storage());
    }
}
