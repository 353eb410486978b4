//! History record entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::ChangeType;

/// An immutable, append-only history entry capturing one observed mutation
/// of an employee.
///
/// `employee_id` references the mutated row but is deliberately not a
/// relational constraint. `timestamp` is taken fresh at recording time in the
/// canonical server zone, not copied from the triggering event. One record is
/// appended per observed mutation, with no deduplication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: String,
    pub employee_id: String,
    pub change_type: ChangeType,
    pub changes: String,
    pub timestamp: NaiveDateTime,
}
