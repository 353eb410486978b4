//! # roster-core
//!
//! Core types for the Roster employee-records service.
//!
//! This crate provides the foundational types shared across all Roster crates:
//! - Entity structs (employees, departments, history records)
//! - The `Auditable` capability trait for audit-stamped entities
//! - The closed `TrackedEntity` variant set and `ChangeEvent` notification
//! - Change-type and entity-kind enums
//! - ID prefix constants
//! - Request/view types for the service layer

pub mod auditable;
pub mod entities;
pub mod enums;
pub mod event;
pub mod ids;
pub mod views;
