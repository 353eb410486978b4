//! Request and view types for the service layer.
//!
//! Views carry timestamps already converted to the requesting tenant's zone;
//! entities keep the canonical server-zone values. The country code is always
//! threaded as an explicit parameter by the caller, never ambient state.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Fields for creating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: String,
    pub hire_date: Option<NaiveDate>,
    pub salary: Option<f64>,
}

/// Partial update: `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
}

/// Tenant-facing employee representation.
///
/// `created_at`/`modified_at` are expressed in the tenant's resolved zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeView {
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

/// Fields for creating a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    pub cost_center: Option<String>,
}
