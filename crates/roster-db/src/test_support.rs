//! Shared test utilities for roster-db tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono_tz::Tz;
use roster_config::TimezoneTable;
use roster_core::views::{NewDepartment, NewEmployee};
use roster_time::{TimeConverter, TimezoneResolver};

use crate::RosterDb;
use crate::service::RosterService;

/// Timezone table used across tests: server zone UTC, a few tenants.
pub(crate) fn test_table() -> TimezoneTable {
    let mut mappings = HashMap::new();
    mappings.insert("NG".to_string(), "Africa/Lagos".to_string());
    mappings.insert("AE".to_string(), "Asia/Dubai".to_string());
    mappings.insert("IN".to_string(), "Asia/Kolkata".to_string());
    TimezoneTable::new("UTC", mappings)
}

/// In-memory service with a UTC host zone for deterministic stamping.
pub(crate) async fn test_service() -> RosterService {
    let db = RosterDb::open_local(":memory:").await.unwrap();
    let converter =
        TimeConverter::with_host_zone(TimezoneResolver::from_table(&test_table()), Tz::UTC);
    RosterService::from_parts(db, Arc::new(converter))
}

pub(crate) fn new_employee(email: &str) -> NewEmployee {
    NewEmployee {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        phone_number: Some("+2348012345678".into()),
        position: Some("Engineer".into()),
        department: Some("Platform".into()),
        email: email.into(),
        hire_date: chrono::NaiveDate::from_ymd_opt(2023, 6, 1),
        salary: Some(120_000.0),
    }
}

pub(crate) fn new_department(name: &str) -> NewDepartment {
    NewDepartment {
        name: name.into(),
        cost_center: Some("cc-100".into()),
    }
}
