//! History read side.
//!
//! Appends happen only in the history recorder; this module is the
//! query-only surface. Records are never updated or deleted.

use roster_core::entities::HistoryRecord;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::RosterService;

impl RosterService {
    /// List history records for an employee, newest first. Records sharing
    /// a timestamp fall back to insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_history(
        &self,
        employee_id: &str,
        limit: u32,
    ) -> Result<Vec<HistoryRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, employee_id, change_type, changes, timestamp
                 FROM employee_history WHERE employee_id = ?1
                 ORDER BY timestamp DESC, rowid DESC LIMIT ?2",
                libsql::params![employee_id, i64::from(limit)],
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(HistoryRecord {
                id: row.get::<String>(0)?,
                employee_id: row.get::<String>(1)?,
                change_type: parse_enum(&row.get::<String>(2)?)?,
                changes: row.get::<String>(3)?,
                timestamp: parse_datetime(&row.get::<String>(4)?)?,
            });
        }
        Ok(records)
    }
}
