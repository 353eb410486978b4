//! Entity lifecycle observer.
//!
//! The repositories call these hooks synchronously at fixed points around
//! every create/update write:
//!
//! 1. `on_before_create` / `on_before_update` — before the SQL is issued;
//!    stamps audit timestamps in place so the persisted row always contains
//!    the stamped values.
//! 2. the write itself
//! 3. `on_after_write` — after the write is applied; publishes a change
//!    event on the bus and does not return until every subscriber has run.
//!
//! A subscriber failure in step 3 propagates to the repository caller, which
//! means a history-recording failure fails the triggering mutation even
//! though the entity row is already durable. That coupling is inherited
//! behavior; see DESIGN.md.

use roster_core::auditable::Auditable;
use roster_core::enums::ChangeType;
use roster_core::event::{ChangeEvent, TrackedEntity};
use roster_time::TimeConverter;
use std::sync::Arc;
use tracing::debug;

use crate::bus::ChangeEventBus;
use crate::error::DatabaseError;
use crate::helpers::truncate_to_micros;

pub struct EntityLifecycleObserver {
    converter: Arc<TimeConverter>,
    bus: ChangeEventBus,
}

impl EntityLifecycleObserver {
    #[must_use]
    pub const fn new(converter: Arc<TimeConverter>, bus: ChangeEventBus) -> Self {
        Self { converter, bus }
    }

    /// Stamp `created_at` with the current server-zone instant and set
    /// `modified_at` equal to it.
    pub fn on_before_create(&self, entity: &mut impl Auditable) {
        let now = truncate_to_micros(self.converter.now_server());
        entity.set_created_at(now);
        entity.set_modified_at(now);
        debug!(id = entity.id(), %now, "stamped creation timestamps");
    }

    /// Advance `modified_at` to the current server-zone instant;
    /// `created_at` is left untouched.
    pub fn on_before_update(&self, entity: &mut impl Auditable) {
        let now = truncate_to_micros(self.converter.now_server());
        entity.set_modified_at(now);
        debug!(id = entity.id(), %now, "stamped modification timestamp");
    }

    /// Publish a change event for a write that is now visible in the
    /// current unit of work.
    ///
    /// Creates and updates are both tagged `UPDATED`: the original service
    /// published the same undifferentiated tag from its post-persist and
    /// post-update hooks, and that behavior is preserved rather than fixed.
    ///
    /// # Errors
    ///
    /// Surfaces any failure raised by a subscriber (notably a history
    /// append failure) to the write path.
    pub async fn on_after_write(&self, entity: TrackedEntity) -> Result<(), DatabaseError> {
        let event = ChangeEvent {
            entity,
            change_type: ChangeType::Updated,
        };
        self.bus.publish(&event).await
    }
}
