//! Time source for time-relative rules
//!
//! Only `pastOnly`/`futureOnly` dates and the standalone past/future/age
//! predicates depend on the current moment. They read it through [`Clock`]
//! at call time so tests can pin it.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Supplies the current moment.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current moment in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use formfield_validator::foundation::{Clock, FixedClock};
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// assert_eq!(FixedClock::new(at).now(), at);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `at`.
    #[must_use]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

/// Shared clock handle stored by schemas.
pub type SharedClock = Arc<dyn Clock>;

/// Returns a handle to the wall clock.
#[must_use]
pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}
