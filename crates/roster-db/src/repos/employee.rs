//! Employee repository.
//!
//! All mutations go through the lifecycle observer: timestamps are stamped
//! before the SQL is issued and a change event is published after the write
//! is applied. Timestamps in views are converted to the requesting tenant's
//! zone; the rows keep canonical server-zone values.

use roster_core::entities::Employee;
use roster_core::event::TrackedEntity;
use roster_core::ids::PREFIX_EMPLOYEE;
use roster_core::views::{EmployeeUpdate, EmployeeView, NewEmployee};
use tracing::{info, warn};

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime, parse_optional_date};
use crate::service::RosterService;

impl RosterService {
    /// Add a new employee.
    ///
    /// Validates email uniqueness first, stamps creation timestamps, inserts
    /// the row, then publishes the change event (which appends the history
    /// record before this method returns).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::EmailAlreadyExists` on a duplicate email, or
    /// any error from the insert or the downstream history append.
    pub async fn add_employee(
        &self,
        new: NewEmployee,
        country_code: &str,
    ) -> Result<EmployeeView, DatabaseError> {
        if self.find_by_email(&new.email).await?.is_some() {
            warn!(email = %new.email, "employee with email already exists");
            return Err(DatabaseError::EmailAlreadyExists { email: new.email });
        }

        let id = self.db().generate_id(PREFIX_EMPLOYEE).await?;
        let mut employee = Employee::from_new(id, new);
        self.observer().on_before_create(&mut employee);

        self.db()
            .conn()
            .execute(
                "INSERT INTO employees
                 (id, first_name, last_name, phone_number, position, department,
                  email, hire_date, salary, version, created_at, modified_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                libsql::params![
                    employee.id.as_str(),
                    employee.first_name.as_str(),
                    employee.last_name.as_str(),
                    employee.phone_number.as_deref(),
                    employee.position.as_deref(),
                    employee.department.as_deref(),
                    employee.email.as_str(),
                    employee.hire_date.map(|d| d.to_string()),
                    employee.salary,
                    employee.version,
                    format_datetime(employee.created_at),
                    format_datetime(employee.modified_at)
                ],
            )
            .await?;

        self.observer()
            .on_after_write(TrackedEntity::Employee(employee.clone()))
            .await?;

        info!(id = %employee.id, "employee added");
        Ok(self.to_view(employee, country_code))
    }

    /// Update an existing employee.
    ///
    /// Applies partial field updates (`None` keeps the stored value), stamps
    /// `modified_at`, and issues the UPDATE with an optimistic version
    /// check. The change event is published after the write.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the row does not exist,
    /// `DatabaseError::VersionConflict` if it changed under us, or any error
    /// from the downstream history append.
    pub async fn update_employee(
        &self,
        id: &str,
        update: EmployeeUpdate,
        country_code: &str,
    ) -> Result<EmployeeView, DatabaseError> {
        let Some(mut employee) = self.find_employee(id).await? else {
            warn!(id, "attempted to update non-existent employee");
            return Err(DatabaseError::NotFound { id: id.to_string() });
        };

        apply_update(&mut employee, update);
        self.observer().on_before_update(&mut employee);

        let expected_version = employee.version;
        employee.version += 1;

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE employees SET
                   first_name = ?1, last_name = ?2, phone_number = ?3, position = ?4,
                   department = ?5, salary = ?6, hire_date = ?7, modified_at = ?8,
                   version = ?9
                 WHERE id = ?10 AND version = ?11",
                libsql::params![
                    employee.first_name.as_str(),
                    employee.last_name.as_str(),
                    employee.phone_number.as_deref(),
                    employee.position.as_deref(),
                    employee.department.as_deref(),
                    employee.salary,
                    employee.hire_date.map(|d| d.to_string()),
                    format_datetime(employee.modified_at),
                    employee.version,
                    id,
                    expected_version
                ],
            )
            .await?;

        if affected == 0 {
            warn!(id, expected_version, "version conflict updating employee");
            return Err(DatabaseError::VersionConflict { id: id.to_string() });
        }

        self.observer()
            .on_after_write(TrackedEntity::Employee(employee.clone()))
            .await?;

        info!(id = %employee.id, version = employee.version, "employee updated");
        Ok(self.to_view(employee, country_code))
    }

    /// Get an employee by ID as a tenant-facing view.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_employee(
        &self,
        id: &str,
        country_code: &str,
    ) -> Result<Option<EmployeeView>, DatabaseError> {
        Ok(self
            .find_employee(id)
            .await?
            .map(|e| self.to_view(e, country_code)))
    }

    /// List employees, paginated, ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_employees(
        &self,
        page: u32,
        per_page: u32,
        country_code: &str,
    ) -> Result<Vec<EmployeeView>, DatabaseError> {
        let offset = u64::from(page) * u64::from(per_page);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {EMPLOYEE_COLUMNS} FROM employees
                     ORDER BY created_at, id LIMIT {per_page} OFFSET {offset}"
                ),
                (),
            )
            .await?;

        let mut views = Vec::new();
        while let Some(row) = rows.next().await? {
            views.push(self.to_view(row_to_employee(&row)?, country_code));
        }
        Ok(views)
    }

    /// Look up an employee by email (used for the uniqueness check).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = ?1"),
                [email],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    /// Fetch the raw entity (server-zone timestamps) by ID.
    pub(crate) async fn find_employee(
        &self,
        id: &str,
    ) -> Result<Option<Employee>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    /// Convert an entity into a view with tenant-local timestamps.
    fn to_view(&self, employee: Employee, country_code: &str) -> EmployeeView {
        EmployeeView {
            created_at: self.converter().to_local(employee.created_at, country_code),
            modified_at: self.converter().to_local(employee.modified_at, country_code),
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            phone_number: employee.phone_number,
            position: employee.position,
            department: employee.department,
            email: employee.email,
            hire_date: employee.hire_date,
            salary: employee.salary,
            version: employee.version,
        }
    }
}

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, phone_number, position, department, \
                                email, hire_date, salary, version, created_at, modified_at";

fn row_to_employee(row: &libsql::Row) -> Result<Employee, DatabaseError> {
    Ok(Employee {
        id: row.get::<String>(0)?,
        first_name: row.get::<String>(1)?,
        last_name: row.get::<String>(2)?,
        phone_number: get_opt_string(row, 3)?,
        position: get_opt_string(row, 4)?,
        department: get_opt_string(row, 5)?,
        email: row.get::<String>(6)?,
        hire_date: parse_optional_date(get_opt_string(row, 7)?.as_deref())?,
        salary: row.get::<Option<f64>>(8)?,
        version: row.get::<i64>(9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        modified_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

fn apply_update(employee: &mut Employee, update: EmployeeUpdate) {
    if let Some(first_name) = update.first_name {
        employee.first_name = first_name;
    }
    if let Some(last_name) = update.last_name {
        employee.last_name = last_name;
    }
    if let Some(phone_number) = update.phone_number {
        employee.phone_number = Some(phone_number);
    }
    if let Some(position) = update.position {
        employee.position = Some(position);
    }
    if let Some(department) = update.department {
        employee.department = Some(department);
    }
    if let Some(salary) = update.salary {
        employee.salary = Some(salary);
    }
    if let Some(hire_date) = update.hire_date {
        employee.hire_date = Some(hire_date);
    }
}
