//! SLA extension and escalation.

use crate::core::Timestamp;
use crate::issue::{Issue, IssueUpdate};
use crate::sla::status::SlaStatus;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Remark appended when an extension arrives too late to help.
pub const ESCALATION_REMARK: &str =
    "Issue has breached the extended SLA and has been escalated to the Head.";

/// What an extension did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensionOutcome {
    /// Deadline pushed back, issue is within the new deadline
    Extended { new_deadline: Timestamp },
    /// Deadline pushed back but already passed; escalated
    Escalated { new_deadline: Timestamp },
}

impl ExtensionOutcome {
    /// Deadline after the extension.
    pub fn new_deadline(&self) -> Timestamp {
        match self {
            ExtensionOutcome::Extended { new_deadline }
            | ExtensionOutcome::Escalated { new_deadline } => *new_deadline,
        }
    }

    /// Whether the extension escalated the issue.
    pub fn escalated(&self) -> bool {
        matches!(self, ExtensionOutcome::Escalated { .. })
    }
}

/// Extend an issue's deadline.
///
/// Adds `extension` to the current deadline (not to `now`), marks the issue
/// `Extended` and logs `reason`. If `now` is already past the new deadline
/// the issue is also marked `Escalated` with a second remark.
pub fn extend(issue: &mut Issue, reason: &str, now: Timestamp, extension: Duration) -> ExtensionOutcome {
    let new_deadline = issue.sla_deadline + extension;
    issue.sla_deadline = new_deadline;
    issue.sla_status = SlaStatus::Extended { since: now };
    issue.push_update(IssueUpdate::sla_remark(
        issue.status,
        now,
        &format!("SLA Extended: {}", reason),
    ));

    if now > new_deadline {
        issue.sla_status = SlaStatus::Escalated { since: now };
        issue.push_update(IssueUpdate::sla_remark(issue.status, now, ESCALATION_REMARK));
        return ExtensionOutcome::Escalated { new_deadline };
    }

    ExtensionOutcome::Extended { new_deadline }
}
