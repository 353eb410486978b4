//! Employee entity.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::auditable::Auditable;
use crate::views::NewEmployee;

/// An employee record. The only entity kind with a history recording rule.
///
/// `version` is the optimistic-lock counter: updates are issued as
/// `UPDATE ... WHERE id = ? AND version = ?` and fail on a stale read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: String,
    pub hire_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub version: i64,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

impl Employee {
    /// Build a not-yet-persisted employee from request fields.
    ///
    /// Timestamps are placeholders; the lifecycle observer overwrites them
    /// before the INSERT is issued.
    #[must_use]
    pub fn from_new(id: String, new: NewEmployee) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            phone_number: new.phone_number,
            position: new.position,
            department: new.department,
            email: new.email,
            hire_date: new.hire_date,
            salary: new.salary,
            version: 0,
            created_at: NaiveDateTime::default(),
            modified_at: NaiveDateTime::default(),
        }
    }
}

impl Auditable for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    fn modified_at(&self) -> NaiveDateTime {
        self.modified_at
    }

    fn set_created_at(&mut self, ts: NaiveDateTime) {
        self.created_at = ts;
    }

    fn set_modified_at(&mut self, ts: NaiveDateTime) {
        self.modified_at = ts;
    }

    fn render_snapshot(&self) -> String {
        format!(
            "Employee [name={} {}, position={}, department={}, email={}, salary={}]",
            self.first_name,
            self.last_name,
            self.position.as_deref().unwrap_or("-"),
            self.department.as_deref().unwrap_or("-"),
            self.email,
            self.salary
                .map_or_else(|| "-".to_string(), |s| format!("{s:.2}")),
        )
    }
}
