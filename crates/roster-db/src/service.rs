//! Service layer orchestrating mutations with the audit pipeline.
//!
//! `RosterService` wraps `RosterDb` (raw database access), the lifecycle
//! observer, and the time converter. All repo methods are implemented as
//! `impl RosterService`.
//!
//! Every mutation method follows this protocol:
//! 1. Before-write hook (timestamp stamping, in place)
//! 2. Execute SQL
//! 3. After-write hook — synchronous event publish, history append
//!
//! There is no enclosing transaction around the three steps: each statement
//! commits on its own, which is what makes the history append an independent
//! transaction scope (step 3 can fail after step 2 is durable).

use std::sync::Arc;

use roster_config::TimezoneTable;
use roster_time::{TimeConverter, TimezoneResolver};

use crate::RosterDb;
use crate::bus::ChangeEventBus;
use crate::error::DatabaseError;
use crate::lifecycle::EntityLifecycleObserver;
use crate::recorder::HistoryRecorder;

pub struct RosterService {
    db: Arc<RosterDb>,
    converter: Arc<TimeConverter>,
    observer: EntityLifecycleObserver,
}

impl RosterService {
    /// Open a local database and wire the full pipeline: observer → bus →
    /// recorder. The recorder is subscribed here, at construction, so the
    /// single subscriber is always present before any mutation runs.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str, table: &TimezoneTable) -> Result<Self, DatabaseError> {
        let db = RosterDb::open_local(path).await?;
        let converter = Arc::new(TimeConverter::new(TimezoneResolver::from_table(table)));
        Ok(Self::from_parts(db, converter))
    }

    /// Wire a service from an existing database handle and converter
    /// (tests inject a converter with a fixed host zone here).
    #[must_use]
    pub fn from_parts(db: RosterDb, converter: Arc<TimeConverter>) -> Self {
        let db = Arc::new(db);
        let recorder = HistoryRecorder::new(Arc::clone(&db), Arc::clone(&converter));
        let mut bus = ChangeEventBus::new();
        bus.subscribe(Arc::new(recorder));
        let observer = EntityLifecycleObserver::new(Arc::clone(&converter), bus);
        Self {
            db,
            converter,
            observer,
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub fn db(&self) -> &RosterDb {
        &self.db
    }

    /// Access the time converter.
    #[must_use]
    pub fn converter(&self) -> &TimeConverter {
        &self.converter
    }

    /// Access the lifecycle observer.
    pub(crate) const fn observer(&self) -> &EntityLifecycleObserver {
        &self.observer
    }
}
