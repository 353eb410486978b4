//! In-process change-event bus.
//!
//! Delivers change events synchronously, in registration order, to every
//! subscriber. No buffering, no persistence, no retry: an event published
//! with zero subscribers is silently dropped. Subscribers register once at
//! process start and stay for the process lifetime; there is no unsubscribe.

use std::sync::Arc;

use async_trait::async_trait;
use roster_core::event::ChangeEvent;

use crate::error::DatabaseError;

/// A subscriber on the change-event bus.
#[async_trait]
pub trait ChangeHandler: Send + Sync {
    /// Handle one change event. An error here propagates straight back to
    /// the publisher and from there into the triggering write path.
    async fn on_change_event(&self, event: &ChangeEvent) -> Result<(), DatabaseError>;
}

/// Synchronous publish/subscribe channel between the entity-mutation path
/// and the history-recording path.
#[derive(Default)]
pub struct ChangeEventBus {
    handlers: Vec<Arc<dyn ChangeHandler>>,
}

impl ChangeEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for the process lifetime.
    pub fn subscribe(&mut self, handler: Arc<dyn ChangeHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver an event to every subscriber in registration order.
    ///
    /// Does not return until all subscribers have run; the first subscriber
    /// error short-circuits delivery and is returned to the caller.
    ///
    /// # Errors
    ///
    /// Propagates the first `DatabaseError` raised by a subscriber.
    pub async fn publish(&self, event: &ChangeEvent) -> Result<(), DatabaseError> {
        for handler in &self.handlers {
            handler.on_change_event(event).await?;
        }
        Ok(())
    }
}
