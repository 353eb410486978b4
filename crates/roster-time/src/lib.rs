//! # roster-time
//!
//! Timezone resolution and wall-clock conversion for Roster.
//!
//! All timestamps are stored in the canonical server zone as naive wall-clock
//! values. This crate provides the two conversions the service needs:
//!
//! - writes: host-local wall clock → server zone ([`TimeConverter::to_server`])
//! - reads: server zone → requesting tenant's zone ([`TimeConverter::to_local`])
//!
//! The asymmetry is deliberate: timestamps are always *written* relative to
//! the process host's default zone and *read* relative to the tenant's zone.

mod convert;
mod resolver;

pub use convert::TimeConverter;
pub use resolver::TimezoneResolver;
