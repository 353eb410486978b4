//! Department repository.
//!
//! Departments go through the same lifecycle pipeline as employees — the
//! observer stamps their timestamps and publishes a change event — but the
//! history recorder has no rule for them, so no history is appended.

use roster_core::entities::Department;
use roster_core::event::TrackedEntity;
use roster_core::ids::PREFIX_DEPARTMENT;
use roster_core::views::NewDepartment;
use tracing::info;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime};
use crate::service::RosterService;

impl RosterService {
    /// Add a department.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn add_department(&self, new: NewDepartment) -> Result<Department, DatabaseError> {
        let id = self.db().generate_id(PREFIX_DEPARTMENT).await?;
        let mut department = Department::from_new(id, new);
        self.observer().on_before_create(&mut department);

        self.db()
            .conn()
            .execute(
                "INSERT INTO departments (id, name, cost_center, created_at, modified_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    department.id.as_str(),
                    department.name.as_str(),
                    department.cost_center.as_deref(),
                    format_datetime(department.created_at),
                    format_datetime(department.modified_at)
                ],
            )
            .await?;

        self.observer()
            .on_after_write(TrackedEntity::Department(department.clone()))
            .await?;

        info!(id = %department.id, "department added");
        Ok(department)
    }

    /// Get a department by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_department(&self, id: &str) -> Result<Option<Department>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, cost_center, created_at, modified_at
                 FROM departments WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Department {
                id: row.get::<String>(0)?,
                name: row.get::<String>(1)?,
                cost_center: get_opt_string(&row, 2)?,
                created_at: parse_datetime(&row.get::<String>(3)?)?,
                modified_at: parse_datetime(&row.get::<String>(4)?)?,
            })),
            None => Ok(None),
        }
    }
}
