//! Clocks
//!
//! Pricing depends on the local wall-clock time, so the current time is always
//! read through a [`Clock`] rather than from the system directly.

use jiff::{Timestamp, Zoned, tz::TimeZone};
use mockall::automock;

/// Source of the current time.
#[automock]
pub trait Clock: Send + Sync {
    /// The current instant in the clock's time zone.
    fn now(&self) -> Zoned;
}

/// Reads the system clock and converts it into a fixed time zone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    time_zone: TimeZone,
}

impl SystemClock {
    #[must_use]
    pub fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// A system clock reporting UTC wall-clock time.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(TimeZone::UTC)
    }

    /// A system clock for an IANA time zone name such as `Europe/London`.
    ///
    /// # Errors
    ///
    /// Returns an error when the time zone is unknown.
    pub fn for_time_zone(name: &str) -> Result<Self, jiff::Error> {
        TimeZone::get(name).map(Self::new)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Timestamp::now().to_zoned(self.time_zone.clone())
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock(Zoned);

impl FixedClock {
    #[must_use]
    pub fn new(now: Zoned) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.0.clone()
    }
}
