//! Degrade-to-default results.
//!
//! Catalog and research operations are total: instead of returning an error
//! they hand back a usable default value together with a notice the
//! interface can show. Callers read [`Outcome::value`] and surface
//! [`Outcome::notice`] separately.

use serde::{Deserialize, Serialize};

/// The result of an operation that never fails outward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The upstream call succeeded.
    Fetched { value: T },
    /// The upstream call failed; `value` is the documented default.
    Degraded { value: T, notice: String },
}

impl<T> Outcome<T> {
    pub fn fetched(value: T) -> Self {
        Outcome::Fetched { value }
    }

    /// Build a degraded outcome. The notice is logged at `debug`; showing
    /// it to the user is the caller's job.
    pub fn degraded(value: T, notice: impl Into<String>) -> Self {
        let notice = notice.into();
        tracing::debug!(notice = %notice, "Degraded result");
        Outcome::Degraded { value, notice }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Fetched { value } | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Fetched { value } | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Outcome::Fetched { .. } => None,
            Outcome::Degraded { notice, .. } => Some(notice),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    /// Split into the value and the optional notice.
    pub fn into_parts(self) -> (T, Option<String>) {
        match self {
            Outcome::Fetched { value } => (value, None),
            Outcome::Degraded { value, notice } => (value, Some(notice)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Fetched { value } => Outcome::Fetched { value: f(value) },
            Outcome::Degraded { value, notice } => Outcome::Degraded {
                value: f(value),
                notice,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn degrade_with_max_level(level: tracing::Level) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _ = Outcome::degraded(Vec::<u32>::new(), "catalog unreachable");
        });
        logs.text()
    }

    #[test]
    fn degraded_notice_stays_below_warn() {
        assert!(degrade_with_max_level(tracing::Level::WARN).is_empty());
        assert!(degrade_with_max_level(tracing::Level::DEBUG).contains("catalog unreachable"));
    }

    #[test]
    fn fetched_has_no_notice() {
        let outcome = Outcome::fetched(vec![1, 2]);
        assert!(!outcome.is_degraded());
        assert!(outcome.notice().is_none());
        assert_eq!(outcome.value(), &vec![1, 2]);
    }

    #[test]
    fn degraded_keeps_default_and_notice() {
        let outcome: Outcome<Vec<u32>> = Outcome::degraded(vec![], "catalog unreachable");
        assert!(outcome.is_degraded());
        assert_eq!(outcome.notice(), Some("catalog unreachable"));

        let (value, notice) = outcome.into_parts();
        assert!(value.is_empty());
        assert_eq!(notice.as_deref(), Some("catalog unreachable"));
    }

    #[test]
    fn map_preserves_notice() {
        let outcome = Outcome::degraded(2, "late").map(|n| n * 10);
        assert_eq!(outcome.value(), &20);
        assert_eq!(outcome.notice(), Some("late"));
    }
}
