//! SLA reporting.
//!
//! Summarizes SLA status across a set of issues.

use crate::core::{IssueId, Timestamp};
use crate::issue::Issue;
use crate::sla::evaluator::SlaEvaluator;
use crate::sla::status::SlaStatus;
use serde::{Deserialize, Serialize};

/// Count of issues per SLA status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub on_time: usize,
    pub at_risk: usize,
    pub deadline_missed: usize,
    pub extended: usize,
    pub escalated: usize,
}

impl StatusCounts {
    fn record(&mut self, status: &SlaStatus) {
        match status {
            SlaStatus::OnTime => self.on_time += 1,
            SlaStatus::AtRisk => self.at_risk += 1,
            SlaStatus::DeadlineMissed => self.deadline_missed += 1,
            SlaStatus::Extended { .. } => self.extended += 1,
            SlaStatus::Escalated { .. } => self.escalated += 1,
        }
    }

    /// Total issues counted.
    pub fn total(&self) -> usize {
        self.on_time + self.at_risk + self.deadline_missed + self.extended + self.escalated
    }
}

/// An SLA report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SlaReport {
    /// Evaluation instant
    pub generated: Timestamp,
    /// Counts over all issues
    pub counts: StatusCounts,
    /// Issues not yet resolved
    pub open_issues: usize,
    /// Open issues inside the warning window
    pub at_risk: Vec<IssueId>,
    /// Open issues past their deadline
    pub missed: Vec<IssueId>,
    /// Open escalated issues
    pub escalated: Vec<IssueId>,
    /// Percentage of open issues not in breach
    pub compliance: f64,
}

impl SlaReport {
    /// Whether no open issue is in breach.
    pub fn compliant(&self) -> bool {
        self.missed.is_empty() && self.escalated.is_empty()
    }
}

/// SLA reporter.
pub struct SlaReporter {
    evaluator: SlaEvaluator,
}

impl SlaReporter {
    /// Create a new reporter.
    pub fn new(evaluator: SlaEvaluator) -> Self {
        Self { evaluator }
    }

    /// Generate a report over `issues` at `now`.
    pub fn generate<'a, I>(&self, issues: I, now: Timestamp) -> SlaReport
    where
        I: IntoIterator<Item = &'a Issue>,
    {
        let mut counts = StatusCounts::default();
        let mut open_issues = 0;
        let mut at_risk = Vec::new();
        let mut missed = Vec::new();
        let mut escalated = Vec::new();

        for issue in issues {
            let status = self.evaluator.evaluate(issue, now);
            counts.record(&status);

            if issue.status.is_terminal() {
                continue;
            }
            open_issues += 1;

            match status {
                SlaStatus::AtRisk => at_risk.push(issue.id.clone()),
                SlaStatus::DeadlineMissed => missed.push(issue.id.clone()),
                SlaStatus::Escalated { .. } => escalated.push(issue.id.clone()),
                _ => {}
            }
        }

        let breaches = missed.len() + escalated.len();
        let compliance = if open_issues == 0 {
            100.0
        } else {
            (open_issues - breaches) as f64 / open_issues as f64 * 100.0
        };

        SlaReport {
            generated: now,
            counts,
            open_issues,
            at_risk,
            missed,
            escalated,
            compliance,
        }
    }

    /// Render report as JSON.
    pub fn to_json(report: &SlaReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    /// Render report as text.
    pub fn to_text(report: &SlaReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("SLA Report ({})\n", report.generated));
        output.push_str(&format!(
            "Status: {}\n",
            if report.compliant() { "COMPLIANT" } else { "NON-COMPLIANT" }
        ));
        output.push_str(&format!(
            "Open issues: {} ({:.1}% within SLA)\n",
            report.open_issues, report.compliance
        ));
        output.push_str("\nBy status:\n");

        let c = &report.counts;
        for (label, count) in [
            ("On Time", c.on_time),
            ("At Risk", c.at_risk),
            ("Deadline Missed", c.deadline_missed),
            ("Extended", c.extended),
            ("Escalated", c.escalated),
        ] {
            output.push_str(&format!("  {:<16} {}\n", label, count));
        }

        for (heading, ids) in [
            ("At risk", &report.at_risk),
            ("Missed", &report.missed),
            ("Escalated", &report.escalated),
        ] {
            if !ids.is_empty() {
                let list: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
                output.push_str(&format!("\n{}: {}\n", heading, list.join(", ")));
            }
        }

        output
    }
}

impl Default for SlaReporter {
    fn default() -> Self {
        Self::new(SlaEvaluator::default())
    }
}
