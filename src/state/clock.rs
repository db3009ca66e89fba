//! Source of the current time.

use time::OffsetDateTime;

/// Reads the current point in time.
pub trait Clock: Send + Sync {
    /// Return the current instant in UTC.
    fn now(&self) -> OffsetDateTime;
}

/// [`Clock`] backed by the operating system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
