//! Time source module
//!
//! Every timestamp the handler emits is read through a [`Clock`] so that
//! routing stays a pure function of its inputs under test.

use chrono::{DateTime, Timelike, Utc};

/// Source of the current UTC time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format an instant as ISO-8601 with a `Z` suffix.
///
/// Microsecond precision; the fraction is left out entirely when it is zero
/// (`2024-03-01T08:30:00Z` vs `2024-03-01T08:30:00.250000Z`).
pub fn iso_timestamp(time: DateTime<Utc>) -> String {
    if time.nanosecond() / 1_000 == 0 {
        time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        format!(
            "{}.{:06}Z",
            time.format("%Y-%m-%dT%H:%M:%S"),
            time.nanosecond() / 1_000 % 1_000_000
        )
    }
}
