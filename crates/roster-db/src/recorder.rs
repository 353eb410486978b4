//! History recorder.
//!
//! The single bus subscriber. Renders the mutated entity's snapshot, builds
//! an immutable history record with a fresh server-zone timestamp, and
//! appends it to `employee_history`.
//!
//! The append runs as its own implicit transaction: the write path never
//! opens an enclosing transaction around publish, so the entity write has
//! already committed by the time the append executes, and the append commits
//! or fails on its own. A failed append therefore does not roll back the
//! entity row — but the error still propagates up the original mutation's
//! call stack.
//!
//! Only employees have a recording rule. Any other tracked variant is
//! skipped with a warning, not an error.

use async_trait::async_trait;
use roster_core::auditable::Auditable;
use roster_core::entities::{Employee, HistoryRecord};
use roster_core::enums::ChangeType;
use roster_core::event::{ChangeEvent, TrackedEntity};
use roster_core::ids::PREFIX_HISTORY;
use roster_time::TimeConverter;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::RosterDb;
use crate::bus::ChangeHandler;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, truncate_to_micros};

pub struct HistoryRecorder {
    db: Arc<RosterDb>,
    converter: Arc<TimeConverter>,
}

impl HistoryRecorder {
    #[must_use]
    pub const fn new(db: Arc<RosterDb>, converter: Arc<TimeConverter>) -> Self {
        Self { db, converter }
    }

    async fn record_employee(
        &self,
        employee: &Employee,
        change_type: ChangeType,
    ) -> Result<(), DatabaseError> {
        let id = self.db.generate_id(PREFIX_HISTORY).await?;
        let record = HistoryRecord {
            id,
            employee_id: employee.id.clone(),
            change_type,
            changes: employee.render_snapshot(),
            timestamp: truncate_to_micros(self.converter.now_server()),
        };

        info!(
            employee_id = %record.employee_id,
            change_type = %record.change_type,
            "recording employee history"
        );

        if let Err(e) = self.append(&record).await {
            error!(employee_id = %record.employee_id, error = %e, "failed to append history record");
            return Err(e);
        }
        Ok(())
    }

    /// Append one record to the durable history store. Never partial: the
    /// single INSERT either commits or fails whole.
    async fn append(&self, record: &HistoryRecord) -> Result<(), DatabaseError> {
        self.db
            .conn()
            .execute(
                "INSERT INTO employee_history (id, employee_id, change_type, changes, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    record.id.as_str(),
                    record.employee_id.as_str(),
                    record.change_type.as_str(),
                    record.changes.as_str(),
                    format_datetime(record.timestamp)
                ],
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ChangeHandler for HistoryRecorder {
    async fn on_change_event(&self, event: &ChangeEvent) -> Result<(), DatabaseError> {
        match &event.entity {
            TrackedEntity::Employee(employee) => {
                self.record_employee(employee, event.change_type).await
            }
            other => {
                warn!(
                    kind = %other.kind(),
                    id = other.id(),
                    "no history recording rule for entity kind, skipping"
                );
                Ok(())
            }
        }
    }
}
