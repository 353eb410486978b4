//! Department entity.
//!
//! Auditable (timestamps are stamped by the lifecycle observer) but has no
//! history recording rule: the history recorder skips it with a warning.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::auditable::Auditable;
use crate::views::NewDepartment;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub cost_center: Option<String>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

impl Department {
    /// Build a not-yet-persisted department; timestamps are placeholders
    /// until the lifecycle observer stamps them.
    #[must_use]
    pub fn from_new(id: String, new: NewDepartment) -> Self {
        Self {
            id,
            name: new.name,
            cost_center: new.cost_center,
            created_at: NaiveDateTime::default(),
            modified_at: NaiveDateTime::default(),
        }
    }
}

impl Auditable for Department {
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
            "Department [name={}, cost_center={}]",
            self.name,
            self.cost_center.as_deref().unwrap_or("-"),
        )
    }
}
