//! The `Auditable` capability trait.
//!
//! Any entity carrying audit metadata implements this. Timestamps are naive
//! wall-clock values expressed in the canonical server zone; the lifecycle
//! observer stamps them in place before the row is written, so the persisted
//! row always contains the stamped values.

use chrono::NaiveDateTime;

/// Capability trait for entities that carry audit timestamps and can render
/// a history snapshot.
///
/// Invariants maintained by the lifecycle observer:
/// - `created_at` is set exactly once, at first persistence, and never changes
/// - `modified_at` equals `created_at` at creation and is advanced on every
///   subsequent mutation
/// - `modified_at >= created_at` always holds
pub trait Auditable {
    /// Opaque generated identifier.
    fn id(&self) -> &str;

    /// Creation timestamp, canonical server zone.
    fn created_at(&self) -> NaiveDateTime;

    /// Last-mutation timestamp, canonical server zone.
    fn modified_at(&self) -> NaiveDateTime;

    fn set_created_at(&mut self, ts: NaiveDateTime);

    fn set_modified_at(&mut self, ts: NaiveDateTime);

    /// Render the entity's business fields into a stable, human-readable
    /// string: fixed field order, no locale-dependent formatting. Used as the
    /// audit payload of a history record.
    fn render_snapshot(&self) -> String;
}
