//! Repository methods, implemented as `impl RosterService` blocks.

mod department;
mod employee;
mod history;
