//! Entity structs for the Roster domain.
//!
//! Each entity maps to a table in the libSQL database. Employees and
//! departments implement [`crate::auditable::Auditable`]; history records are
//! append-only and never mutated after insert.

mod department;
mod employee;
mod history;

pub use department::Department;
pub use employee::Employee;
pub use history::HistoryRecord;
