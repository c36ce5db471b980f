//! SLA status evaluation.
//!
//! Derives the display status of an issue from its workflow status,
//! deadline and previously stored SLA status.

use crate::core::Timestamp;
use crate::issue::{Issue, IssueStatus};
use crate::sla::agreement::SlaPolicy;
use crate::sla::status::SlaStatus;
use chrono::Duration;

/// Compute the SLA status at `now`.
///
/// First match wins:
/// 1. resolved issues report `OnTime`;
/// 2. `Extended`/`Escalated` are returned unchanged;
/// 3. otherwise `OnTime` before `deadline - warning`, `AtRisk` before
///    `deadline`, `DeadlineMissed` from the deadline on.
pub fn evaluate(
    status: IssueStatus,
    deadline: Timestamp,
    current: SlaStatus,
    now: Timestamp,
    warning: Duration,
) -> SlaStatus {
    if status == IssueStatus::Resolved {
        return SlaStatus::OnTime;
    }

    match current {
        SlaStatus::Extended { .. } | SlaStatus::Escalated { .. } => current,
        _ => {
            let warning_threshold = deadline - warning;
            if now < warning_threshold {
                SlaStatus::OnTime
            } else if now < deadline {
                SlaStatus::AtRisk
            } else {
                SlaStatus::DeadlineMissed
            }
        }
    }
}

/// Evaluator bound to a policy's warning window.
#[derive(Clone, Debug)]
pub struct SlaEvaluator {
    warning: Duration,
}

impl SlaEvaluator {
    /// Create an evaluator for a policy.
    pub fn new(policy: &SlaPolicy) -> Self {
        Self {
            warning: policy.warning(),
        }
    }

    /// Evaluate an issue at `now`.
    pub fn evaluate(&self, issue: &Issue, now: Timestamp) -> SlaStatus {
        evaluate(
            issue.status,
            issue.sla_deadline,
            issue.sla_status,
            now,
            self.warning,
        )
    }

    /// Copy of `issue` carrying its evaluated status.
    pub fn freshen(&self, issue: &Issue, now: Timestamp) -> Issue {
        let mut fresh = issue.clone();
        fresh.sla_status = self.evaluate(issue, now);
        fresh
    }
}

impl Default for SlaEvaluator {
    fn default() -> Self {
        Self::new(&SlaPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
    }

    fn eval(status: IssueStatus, current: SlaStatus, elapsed_hours: i64) -> SlaStatus {
        let deadline = t0() + Duration::hours(48);
        evaluate(
            status,
            deadline,
            current,
            t0() + Duration::hours(elapsed_hours),
            Duration::hours(24),
        )
    }

    #[test]
    fn test_resolved_is_always_on_time() {
        for hours in [0, 30, 100] {
            assert_eq!(eval(IssueStatus::Resolved, SlaStatus::DeadlineMissed, hours), SlaStatus::OnTime);
        }
        let escalated = SlaStatus::Escalated { since: t0() };
        assert_eq!(eval(IssueStatus::Resolved, escalated, 200), SlaStatus::OnTime);
    }

    #[test]
    fn test_sticky_statuses_survive() {
        let extended = SlaStatus::Extended { since: t0() };
        let escalated = SlaStatus::Escalated { since: t0() };
        for hours in [1, 30, 100] {
            assert_eq!(eval(IssueStatus::InProgress, extended, hours), extended);
            assert_eq!(eval(IssueStatus::Submitted, escalated, hours), escalated);
        }
    }

    #[test]
    fn test_time_based_classification() {
        assert_eq!(eval(IssueStatus::Submitted, SlaStatus::OnTime, 23), SlaStatus::OnTime);
        assert_eq!(eval(IssueStatus::Submitted, SlaStatus::OnTime, 25), SlaStatus::AtRisk);
        assert_eq!(eval(IssueStatus::InProgress, SlaStatus::AtRisk, 49), SlaStatus::DeadlineMissed);
    }

    #[test]
    fn test_threshold_boundaries() {
        // Warning starts exactly at deadline - 24h; missed exactly at the deadline.
        assert_eq!(eval(IssueStatus::Submitted, SlaStatus::OnTime, 24), SlaStatus::AtRisk);
        assert_eq!(eval(IssueStatus::Submitted, SlaStatus::OnTime, 48), SlaStatus::DeadlineMissed);
    }

    #[test]
    fn test_missed_can_recover_without_sticky() {
        // Derived statuses are recomputed, so a stored DeadlineMissed is not sticky.
        assert_eq!(eval(IssueStatus::Submitted, SlaStatus::DeadlineMissed, 1), SlaStatus::OnTime);
    }

    #[test]
    fn test_short_window_is_at_risk_immediately() {
        let deadline = t0() + Duration::hours(10);
        let status = evaluate(
            IssueStatus::Submitted,
            deadline,
            SlaStatus::OnTime,
            t0(),
            Duration::hours(24),
        );
        assert_eq!(status, SlaStatus::AtRisk);
    }

    #[test]
    fn test_idempotent() {
        let first = eval(IssueStatus::Submitted, SlaStatus::OnTime, 30);
        let second = eval(IssueStatus::Submitted, first, 30);
        assert_eq!(first, second);
    }
}
