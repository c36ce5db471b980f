//! Common types used across civic-sla modules.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Timestamp wrapper for consistent serialization.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Get current UTC timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

/// Identifier of an issue.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IssueId(pub String);

impl IssueId {
    /// Create an issue ID from an existing string.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Generate a unique ID.
    pub fn generate() -> Self {
        Self(format!("issue-{}", uuid::Uuid::new_v4()))
    }

    /// Get the ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of the current time.
///
/// Stores read the clock on every evaluation, so tests can move time
/// forward between calls with [`ManualClock`].
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Cell<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    /// Set the current instant.
    pub fn set(&self, instant: Timestamp) {
        self.current.set(instant);
    }

    /// Move the clock forward (or backward, for a negative duration).
    pub fn advance(&self, by: chrono::Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.current.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_issue_id_generate() {
        let a = IssueId::generate();
        let b = IssueId::generate();
        assert!(a.as_str().starts_with("issue-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_issue_id_display() {
        let id = IssueId::new("issue-42");
        assert_eq!(format!("{}", id), "issue-42");
    }

    #[test]
    fn test_manual_clock() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::hours(25));
        assert_eq!(clock.now(), start + Duration::hours(25));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
