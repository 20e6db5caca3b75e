use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use formfield_validator::prelude::*;
use tracing::subscriber::DefaultGuard;

/// The instant every time-relative test runs at.
pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

pub fn frozen_clock() -> SharedClock {
    Arc::new(FixedClock::new(frozen_now()))
}

/// Routes `tracing` output to the test harness for the current thread.
pub fn trace() -> DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// `(path, code)` pairs of a rejection, in detection order.
pub fn codes<T>(result: &ValidationResult<T>) -> Vec<(String, String)> {
    result
        .errors()
        .map(|issues| {
            issues
                .iter()
                .map(|issue| (issue.path_string(), issue.code.to_string()))
                .collect()
        })
        .unwrap_or_default()
}
