//! Database error types for roster-db.

use thiserror::Error;

/// Errors from database operations and the audit pipeline.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Employee lookup by ID returned nothing.
    #[error("Employee not found: {id}")]
    NotFound { id: String },

    /// An employee with this email already exists.
    #[error("Employee with email '{email}' already exists")]
    EmailAlreadyExists { email: String },

    /// Optimistic version check failed: the row changed under us.
    #[error("Version conflict updating employee {id}")]
    VersionConflict { id: String },

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
