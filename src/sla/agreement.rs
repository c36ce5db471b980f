//! SLA policy.
//!
//! Window lengths that govern deadlines, warnings and extensions.

use crate::core::{Error, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Longest window, warning or extension accepted, in hours (ten years).
pub const MAX_WINDOW_HOURS: u32 = 24 * 365 * 10;

/// Resolution SLA applied to every reported issue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaPolicy {
    /// Hours from submission to deadline
    pub window_hours: u32,
    /// Hours before the deadline at which an issue becomes at risk
    pub warning_hours: u32,
    /// Hours added to the deadline per extension
    pub extension_hours: u32,
    /// Separate window for emergency reports, if any
    pub emergency_window_hours: Option<u32>,
}

impl SlaPolicy {
    /// Create a policy with the given resolution window.
    pub fn new(window_hours: u32) -> Self {
        Self {
            window_hours,
            ..Self::default()
        }
    }

    /// Set the emergency window.
    pub fn with_emergency_window(mut self, hours: u32) -> Self {
        self.emergency_window_hours = Some(hours);
        self
    }

    /// Set the warning window.
    pub fn with_warning(mut self, hours: u32) -> Self {
        self.warning_hours = hours;
        self
    }

    /// Resolution window hours for a report.
    pub fn window_hours_for(&self, is_emergency: bool) -> u32 {
        match self.emergency_window_hours {
            Some(hours) if is_emergency => hours,
            _ => self.window_hours,
        }
    }

    /// Resolution window for a report.
    pub fn window(&self, is_emergency: bool) -> Duration {
        Duration::hours(i64::from(self.window_hours_for(is_emergency)))
    }

    /// Warning window before the deadline.
    pub fn warning(&self) -> Duration {
        Duration::hours(i64::from(self.warning_hours))
    }

    /// Time added per extension.
    pub fn extension(&self) -> Duration {
        Duration::hours(i64::from(self.extension_hours))
    }

    /// Reject windows with no defined behavior or outside timestamp range.
    pub fn validate(&self) -> Result<()> {
        for (name, hours) in [
            ("window_hours", Some(self.window_hours)),
            ("warning_hours", Some(self.warning_hours)),
            ("extension_hours", Some(self.extension_hours)),
            ("emergency_window_hours", self.emergency_window_hours),
        ] {
            if let Some(hours) = hours {
                if hours > MAX_WINDOW_HOURS {
                    return Err(Error::Config(format!(
                        "sla.{} must be at most {}",
                        name, MAX_WINDOW_HOURS
                    )));
                }
            }
        }
        if self.window_hours == 0 {
            return Err(Error::Config("sla.window_hours must be positive".into()));
        }
        if self.emergency_window_hours == Some(0) {
            return Err(Error::Config(
                "sla.emergency_window_hours must be positive".into(),
            ));
        }
        if self.extension_hours == 0 {
            return Err(Error::Config("sla.extension_hours must be positive".into()));
        }
        Ok(())
    }
}

impl Default for SlaPolicy {
    fn default() -> Self {
        Self {
            window_hours: 48,
            warning_hours: 24,
            extension_hours: 48,
            emergency_window_hours: None,
        }
    }
}
