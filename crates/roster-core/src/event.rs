//! In-process change notifications.
//!
//! A `ChangeEvent` is ephemeral: created by the lifecycle observer after a
//! write is applied, delivered synchronously on the event bus, never
//! persisted or retained.

use crate::entities::{Department, Employee};
use crate::enums::{ChangeType, EntityKind};

/// Closed set of entity variants the audit pipeline can carry.
///
/// Dispatch over this enum is explicit and tagged; adding a new tracked
/// entity kind means adding a variant and the match arms that handle it,
/// not a new trait implementation discovered at runtime.
#[derive(Debug, Clone)]
pub enum TrackedEntity {
    Employee(Employee),
    Department(Department),
}

impl TrackedEntity {
    /// The kind tag for this variant.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Employee(_) => EntityKind::Employee,
            Self::Department(_) => EntityKind::Department,
        }
    }

    /// The mutated entity's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Employee(e) => &e.id,
            Self::Department(d) => &d.id,
        }
    }
}

/// Notification that a tracked entity was mutated.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub entity: TrackedEntity,
    pub change_type: ChangeType,
}
