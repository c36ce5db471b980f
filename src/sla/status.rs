//! SLA status labels.

use crate::core::Timestamp;
use serde::{Deserialize, Serialize};

/// SLA status of an issue.
///
/// `Extended` and `Escalated` are set by explicit actions and survive
/// time-based re-evaluation; the other three are derived from the deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlaStatus {
    /// More than the warning window left before the deadline
    OnTime,
    /// Inside the warning window
    AtRisk,
    /// Deadline passed
    DeadlineMissed,
    /// Deadline was pushed back by an extension
    Extended { since: Timestamp },
    /// Extension did not help; forwarded to the Head
    Escalated { since: Timestamp },
}

impl SlaStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            SlaStatus::OnTime => "On Time",
            SlaStatus::AtRisk => "At Risk",
            SlaStatus::DeadlineMissed => "Deadline Missed",
            SlaStatus::Extended { .. } => "Extended",
            SlaStatus::Escalated { .. } => "Escalated",
        }
    }

    /// Whether this status was set by an explicit action.
    pub fn is_sticky(&self) -> bool {
        matches!(self, SlaStatus::Extended { .. } | SlaStatus::Escalated { .. })
    }

    /// Whether this status counts against compliance.
    pub fn is_breach(&self) -> bool {
        matches!(
            self,
            SlaStatus::DeadlineMissed | SlaStatus::Escalated { .. }
        )
    }

    /// When a sticky status was set.
    pub fn since(&self) -> Option<Timestamp> {
        match self {
            SlaStatus::Extended { since } | SlaStatus::Escalated { since } => Some(*since),
            _ => None,
        }
    }
}

impl Default for SlaStatus {
    fn default() -> Self {
        SlaStatus::OnTime
    }
}

impl std::fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::now;

    #[test]
    fn test_labels() {
        let t = now();
        assert_eq!(SlaStatus::OnTime.to_string(), "On Time");
        assert_eq!(SlaStatus::AtRisk.to_string(), "At Risk");
        assert_eq!(SlaStatus::DeadlineMissed.to_string(), "Deadline Missed");
        assert_eq!(SlaStatus::Extended { since: t }.to_string(), "Extended");
        assert_eq!(SlaStatus::Escalated { since: t }.to_string(), "Escalated");
    }

    #[test]
    fn test_sticky() {
        let t = now();
        assert!(SlaStatus::Extended { since: t }.is_sticky());
        assert!(SlaStatus::Escalated { since: t }.is_sticky());
        assert!(!SlaStatus::AtRisk.is_sticky());
        assert_eq!(SlaStatus::Extended { since: t }.since(), Some(t));
        assert_eq!(SlaStatus::OnTime.since(), None);
    }

    #[test]
    fn test_breach() {
        assert!(SlaStatus::DeadlineMissed.is_breach());
        assert!(SlaStatus::Escalated { since: now() }.is_breach());
        assert!(!SlaStatus::Extended { since: now() }.is_breach());
        assert!(!SlaStatus::AtRisk.is_breach());
    }
}
