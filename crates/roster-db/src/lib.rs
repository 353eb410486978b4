//! # roster-db
//!
//! libSQL database operations for the Roster employee-records service.
//!
//! Handles all relational state — employees, departments, and the
//! append-only employee history — plus the audit pipeline that ties them
//! together: lifecycle observer, change-event bus, and history recorder.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29).

pub mod bus;
pub mod error;
pub mod helpers;
pub mod lifecycle;
mod migrations;
pub mod recorder;
pub mod repos;
pub mod service;

#[cfg(test)]
mod pipeline_tests;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Roster state operations.
///
/// Wraps a libSQL database and connection; runs migrations on open and
/// provides prefixed ID generation.
pub struct RosterDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl RosterDb {
    /// Open a local-only database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let roster_db = Self { db, conn };
        roster_db.run_migrations().await?;
        Ok(roster_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"emp-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
