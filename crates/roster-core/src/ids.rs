//! ID prefix constants.
//!
//! Every row carries an opaque ID of the form `{prefix}-{8 hex chars}`,
//! generated at insert time by the database layer.

/// Employees.
pub const PREFIX_EMPLOYEE: &str = "emp";

/// Departments.
pub const PREFIX_DEPARTMENT: &str = "dep";

/// History records.
pub const PREFIX_HISTORY: &str = "hst";

/// All prefixes, for exhaustive format tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_EMPLOYEE, PREFIX_DEPARTMENT, PREFIX_HISTORY];
