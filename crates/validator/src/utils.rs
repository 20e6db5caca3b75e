//! Small helpers for form code built on top of the schemas.

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;

use crate::foundation::ValidationIssue;

/// Returns `true` for `null`, blank strings, `[]` and `{}`.
///
/// Unlike schema presence checks, whitespace-only strings count as empty
/// here.
///
/// # Examples
///
/// ```
/// use formfield_validator::utils::is_empty_value;
/// use serde_json::json;
///
/// assert!(is_empty_value(&json!("   ")));
/// assert!(is_empty_value(&json!({})));
/// assert!(!is_empty_value(&json!(0)));
/// assert!(!is_empty_value(&json!(false)));
/// ```
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// First message recorded for `path`, or `fallback`.
///
/// `path` uses the dotted form of [`ValidationIssue::path_string`]; the empty
/// string selects issues on the value itself.
///
/// # Examples
///
/// ```
/// use formfield_validator::foundation::ValidationIssue;
/// use formfield_validator::utils::message_or_default;
///
/// let issues = [ValidationIssue::new("zipInvalid", "Please enter a valid ZIP code").at("zipCode")];
/// assert_eq!(message_or_default(&issues, "zipCode", "Check this field"), "Please enter a valid ZIP code");
/// assert_eq!(message_or_default(&issues, "city", "Check this field"), "Check this field");
/// ```
pub fn message_or_default<'a, I>(issues: I, path: &str, fallback: &str) -> String
where
    I: IntoIterator<Item = &'a ValidationIssue>,
{
    issues
        .into_iter()
        .find(|issue| issue.path_string() == path)
        .map_or_else(|| fallback.to_owned(), |issue| issue.message.to_string())
}

/// Trailing-edge debounce driven by caller-supplied timestamps.
///
/// Each [`call`](Self::call) replaces the pending value and restarts the
/// quiet period; [`poll`](Self::poll) hands the value out once nothing has
/// been called for at least `quiet`. Time is passed in so the same type works
/// with a [`Clock`](crate::foundation::Clock) or a UI event loop.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use formfield_validator::utils::Debouncer;
///
/// let t0 = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let mut debouncer = Debouncer::new(TimeDelta::milliseconds(300));
///
/// debouncer.call("jo", t0);
/// debouncer.call("joe", t0 + TimeDelta::milliseconds(100));
/// assert_eq!(debouncer.poll(t0 + TimeDelta::milliseconds(300)), None);
/// assert_eq!(debouncer.poll(t0 + TimeDelta::milliseconds(400)), Some("joe"));
/// assert_eq!(debouncer.poll(t0 + TimeDelta::seconds(5)), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: TimeDelta,
    pending: Option<(T, DateTime<Utc>)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(quiet: TimeDelta) -> Self {
        Self { quiet, pending: None }
    }

    /// The configured quiet period.
    #[must_use]
    pub fn quiet(&self) -> TimeDelta {
        self.quiet
    }

    /// Records `value` as the latest input at `now`.
    pub fn call(&mut self, value: T, now: DateTime<Utc>) {
        self.pending = Some((value, now));
    }

    /// Returns `true` while a value is waiting to be released.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Releases the pending value if the quiet period has elapsed at `now`.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        let settled = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now - *at >= self.quiet);
        if settled {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(""), true)]
    #[case(json!(" \t"), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    #[case(json!("a"), false)]
    #[case(json!([null]), false)]
    #[case(json!({"a": null}), false)]
    #[case(json!(0), false)]
    fn test_is_empty_value(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_empty_value(&value), expected);
    }

    mod messages {
        use super::*;

        fn issues() -> Vec<ValidationIssue> {
            vec![
                ValidationIssue::new("required", "This field is required"),
                ValidationIssue::new("fileType", "File type is not allowed").at(1_usize),
                ValidationIssue::new("fileSize", "File is too large").at(1_usize),
            ]
        }

        #[test]
        fn test_first_message_for_path_wins() {
            assert_eq!(message_or_default(&issues(), "1", "x"), "File type is not allowed");
        }

        #[test]
        fn test_root_path() {
            assert_eq!(message_or_default(&issues(), "", "x"), "This field is required");
        }

        #[test]
        fn test_fallback() {
            assert_eq!(message_or_default(&issues(), "0", "Check this file"), "Check this file");
            assert_eq!(message_or_default(&Vec::<ValidationIssue>::new(), "", "none"), "none");
        }
    }

    mod debounce {
        use super::*;

        fn at(ms: i64) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap() + TimeDelta::milliseconds(ms)
        }

        #[test]
        fn test_idle_poll_is_none() {
            let mut debouncer: Debouncer<u8> = Debouncer::new(TimeDelta::milliseconds(50));
            assert_eq!(debouncer.poll(at(1000)), None);
            assert!(!debouncer.is_pending());
        }

        #[test]
        fn test_each_call_restarts_quiet_period() {
            let mut debouncer = Debouncer::new(TimeDelta::milliseconds(100));
            debouncer.call(1, at(0));
            debouncer.call(2, at(90));
            debouncer.call(3, at(180));
            assert_eq!(debouncer.poll(at(200)), None);
            assert!(debouncer.is_pending());
            assert_eq!(debouncer.poll(at(280)), Some(3));
            assert!(!debouncer.is_pending());
        }

        #[test]
        fn test_cancel() {
            let mut debouncer = Debouncer::new(TimeDelta::zero());
            debouncer.call("a", at(0));
            debouncer.cancel();
            assert_eq!(debouncer.poll(at(10)), None);
            assert_eq!(debouncer.quiet(), TimeDelta::zero());
        }
    }
}
