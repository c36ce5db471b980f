//! In-memory issue repository.
//!
//! Issues live in an arena indexed by ID. Reads return copies whose SLA
//! status has been re-evaluated against the store's clock; the stored
//! record only changes through explicit workflow actions.

use crate::core::{Clock, Error, IssueId, Result, SystemClock};
use crate::issue::model::{
    ImageRef, Issue, IssueStatus, IssueUpdate, IssueUpdateRequest, NewIssue, Reporter,
};
use crate::sla::{self, ExtensionOutcome, SlaEvaluator, SlaPolicy, SlaStatus};
use std::collections::HashMap;
use tracing::debug;

/// Description of the update logged when a worker is assigned.
pub const ASSIGNED_REMARK: &str = "A worker has been assigned to this issue.";

/// Issue repository.
pub struct IssueStore<C: Clock = SystemClock> {
    /// Issues in insertion order
    issues: Vec<Issue>,
    /// ID to arena slot
    index: HashMap<IssueId, usize>,
    /// SLA policy
    policy: SlaPolicy,
    /// Evaluator derived from the policy
    evaluator: SlaEvaluator,
    /// Time source
    clock: C,
}

impl IssueStore<SystemClock> {
    /// Create a store on wall-clock time.
    pub fn new(policy: SlaPolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }
}

impl<C: Clock> IssueStore<C> {
    /// Create a store with a specific clock.
    pub fn with_clock(policy: SlaPolicy, clock: C) -> Self {
        let evaluator = SlaEvaluator::new(&policy);
        Self {
            issues: Vec::new(),
            index: HashMap::new(),
            policy,
            evaluator,
            clock,
        }
    }

    /// The store's clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The store's SLA policy.
    pub fn policy(&self) -> &SlaPolicy {
        &self.policy
    }

    /// The store's evaluator.
    pub fn evaluator(&self) -> &SlaEvaluator {
        &self.evaluator
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Insert a prepared record, replacing any issue with the same ID.
    pub fn insert(&mut self, issue: Issue) -> IssueId {
        let id = issue.id.clone();
        match self.index.get(&id) {
            Some(&slot) => self.issues[slot] = issue,
            None => {
                self.index.insert(id.clone(), self.issues.len());
                self.issues.push(issue);
            }
        }
        id
    }

    /// Record a new report.
    pub fn create(&mut self, data: NewIssue, reporter: Reporter) -> Issue {
        let now = self.clock.now();
        let window_hours = self.policy.window_hours_for(data.is_emergency);
        let sla_deadline = now + self.policy.window(data.is_emergency);

        let issue = Issue {
            id: IssueId::generate(),
            title: format!(
                "{} issue reported on {}",
                data.category,
                now.format("%Y-%m-%d")
            ),
            description: data.description,
            category: data.category,
            status: IssueStatus::Submitted,
            city: data.city,
            sla_status: SlaStatus::OnTime,
            sla_deadline,
            location: data.location,
            image: ImageRef::new(&data.photo_url, "user uploaded issue"),
            submitted_by: reporter,
            submitted_at: now,
            assigned_to: None,
            updates: vec![IssueUpdate::new(
                IssueStatus::Submitted,
                now,
                &format!(
                    "Issue reported by citizen. A {}-hour resolution SLA has been initiated.",
                    window_hours
                ),
            )],
            is_emergency: data.is_emergency,
        };

        debug!(issue_id = %issue.id, deadline = %issue.sla_deadline, "issue created");
        self.insert(issue.clone());
        issue
    }

    /// All issues, emergencies first, then newest first.
    pub fn list(&self) -> Vec<Issue> {
        let now = self.clock.now();
        let mut issues: Vec<Issue> = self
            .issues
            .iter()
            .map(|issue| self.evaluator.freshen(issue, now))
            .collect();

        issues.sort_by(|a, b| {
            b.is_emergency
                .cmp(&a.is_emergency)
                .then_with(|| b.submitted_at.cmp(&a.submitted_at))
        });
        issues
    }

    /// Get an issue by ID.
    pub fn get_by_id(&self, id: &IssueId) -> Option<Issue> {
        self.slot(id)
            .map(|slot| self.evaluator.freshen(&self.issues[slot], self.clock.now()))
    }

    /// Issues reported by a citizen, newest first.
    pub fn list_by_reporter(&self, uid: &str) -> Vec<Issue> {
        self.newest_first(|issue| issue.submitted_by.uid == uid)
    }

    /// Issues assigned to a worker, newest first.
    pub fn list_by_worker(&self, worker_id: &str) -> Vec<Issue> {
        self.newest_first(|issue| issue.assigned_to.as_deref() == Some(worker_id))
    }

    /// Assign a worker.
    ///
    /// A `Submitted` issue moves to `InProgress` and the assignment is
    /// logged; otherwise only the assignee changes.
    pub fn update_assignment(&mut self, id: &IssueId, worker_id: &str) -> Result<Issue> {
        let now = self.clock.now();
        let issue = self.issue_mut(id)?;

        issue.assigned_to = Some(worker_id.to_string());
        if issue.status == IssueStatus::Submitted {
            issue.status = IssueStatus::InProgress;
            issue.push_update(IssueUpdate::new(IssueStatus::InProgress, now, ASSIGNED_REMARK));
        }

        let issue = issue.clone();
        Ok(self.evaluator.freshen(&issue, now))
    }

    /// Apply a status change and log it.
    pub fn append_update(&mut self, id: &IssueId, request: IssueUpdateRequest) -> Result<Issue> {
        let now = self.clock.now();
        let issue = self.issue_mut(id)?;

        if issue.status.is_terminal() && request.status != issue.status {
            return Err(Error::InvalidTransition {
                from: issue.status.to_string(),
                to: request.status.to_string(),
            });
        }

        let mut update = IssueUpdate::new(request.status, now, &request.description);
        if let Some(image) = request.image {
            update = update.with_image(image);
        }

        issue.status = request.status;
        issue.push_update(update);

        let issue = issue.clone();
        Ok(self.evaluator.freshen(&issue, now))
    }

    /// Extend an issue's SLA deadline, escalating if it is still overdue.
    pub fn extend_sla(&mut self, id: &IssueId, reason: &str) -> Result<Issue> {
        self.extend(id, reason).map(|(issue, _)| issue)
    }

    /// Extend an issue's SLA deadline and report what the extension did.
    pub fn extend(&mut self, id: &IssueId, reason: &str) -> Result<(Issue, ExtensionOutcome)> {
        let now = self.clock.now();
        let extension = self.policy.extension();
        let issue = self.issue_mut(id)?;

        let outcome = sla::extend(issue, reason, now, extension);

        let issue = issue.clone();
        Ok((self.evaluator.freshen(&issue, now), outcome))
    }

    /// Stored workflow status of an issue.
    pub fn status(&self, id: &IssueId) -> Result<IssueStatus> {
        self.slot(id)
            .map(|slot| self.issues[slot].status)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    fn slot(&self, id: &IssueId) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn issue_mut(&mut self, id: &IssueId) -> Result<&mut Issue> {
        match self.slot(id) {
            Some(slot) => Ok(&mut self.issues[slot]),
            None => Err(Error::IssueNotFound(id.to_string())),
        }
    }

    fn newest_first<F>(&self, filter: F) -> Vec<Issue>
    where
        F: Fn(&Issue) -> bool,
    {
        let now = self.clock.now();
        let mut issues: Vec<Issue> = self
            .issues
            .iter()
            .filter(|issue| filter(issue))
            .map(|issue| self.evaluator.freshen(issue, now))
            .collect();
        issues.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        issues
    }
}
