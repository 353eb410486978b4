//! Wall-clock conversion between server, tenant, and host zones.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::resolver::TimezoneResolver;

/// Converts naive wall-clock timestamps between the canonical server zone
/// and a tenant's resolved zone (reads), and between the process host's
/// default zone and the server zone (writes).
#[derive(Debug, Clone)]
pub struct TimeConverter {
    resolver: TimezoneResolver,
    host_zone: Tz,
}

impl TimeConverter {
    /// Build a converter, detecting the host's IANA zone from the OS.
    ///
    /// Falls back to UTC if the host zone cannot be detected or parsed.
    #[must_use]
    pub fn new(resolver: TimezoneResolver) -> Self {
        let host_zone = iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| name.parse::<Tz>().ok())
            .unwrap_or_else(|| {
                warn!("could not detect host timezone, assuming UTC");
                Tz::UTC
            });
        Self::with_host_zone(resolver, host_zone)
    }

    /// Build a converter with an explicit host zone (tests).
    #[must_use]
    pub const fn with_host_zone(resolver: TimezoneResolver, host_zone: Tz) -> Self {
        Self {
            resolver,
            host_zone,
        }
    }

    /// The resolver backing tenant-zone lookups.
    #[must_use]
    pub const fn resolver(&self) -> &TimezoneResolver {
        &self.resolver
    }

    /// Reinterpret a server-zone wall-clock timestamp in the tenant's zone:
    /// same instant, different local representation.
    #[must_use]
    pub fn to_local(&self, server_ts: NaiveDateTime, country_code: &str) -> NaiveDateTime {
        let tenant_zone = self.resolver.resolve(country_code);
        project(server_ts, self.resolver.server_zone(), tenant_zone)
    }

    /// Reinterpret a wall-clock timestamp expressed in the process host's
    /// default zone (not the tenant's) into the canonical server zone.
    #[must_use]
    pub fn to_server(&self, local_ts: NaiveDateTime) -> NaiveDateTime {
        project(local_ts, self.host_zone, self.resolver.server_zone())
    }

    /// Current instant expressed as a server-zone wall clock.
    ///
    /// Goes through the host zone so stamping follows the same write path as
    /// every other timestamp.
    #[must_use]
    pub fn now_server(&self) -> NaiveDateTime {
        self.to_server(self.host_now())
    }

    fn host_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.host_zone).naive_local()
    }
}

/// Attach a zone to a naive wall-clock value and re-express the instant in
/// another zone.
///
/// DST edge cases: an ambiguous wall-clock time (fall-back overlap) maps to
/// the earlier of the two instants; a nonexistent one (spring-forward gap)
/// is shifted forward by the length of the gap.
fn project(naive: NaiveDateTime, from: Tz, to: Tz) -> NaiveDateTime {
    attach(naive, from).with_timezone(&to).naive_local()
}

fn attach(naive: NaiveDateTime, zone: Tz) -> DateTime<Tz> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => zone
            .from_local_datetime(&(naive + gap_length(naive, zone)))
            .earliest()
            .unwrap_or_else(|| zone.from_utc_datetime(&naive)),
    }
}

/// Length of the transition gap a nonexistent wall clock falls into,
/// derived from the zone's offsets a day before and after. Not all zones
/// use one-hour transitions (Lord Howe Island shifts by 30 minutes).
fn gap_length(naive: NaiveDateTime, zone: Tz) -> Duration {
    let before = offset_seconds(naive - Duration::days(1), zone);
    let after = offset_seconds(naive + Duration::days(1), zone);
    Duration::seconds(i64::from((after - before).max(0)))
}

fn offset_seconds(at: NaiveDateTime, zone: Tz) -> i32 {
    zone.from_local_datetime(&at)
        .earliest()
        .map_or(0, |dt| dt.offset().fix().local_minus_utc())
}
