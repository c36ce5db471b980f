//! Workflow service.
//!
//! Ties the issue store, directory and scoreboard together for the actions
//! citizens, admins and workers take.

use crate::config::Config;
use crate::core::{Clock, Error, IssueId, Result, SystemClock};
use crate::directory::{Directory, Worker};
use crate::issue::{Issue, IssueStatus, IssueStore, IssueUpdateRequest, NewIssue};
use crate::scoring::{LeaderboardEntry, RewardCatalog, ScoringRules, Scoreboard};
use crate::sla::{SlaReport, SlaReporter};
use tracing::{info, warn};

/// Civic issue workflow.
pub struct CivicService<C: Clock = SystemClock> {
    store: IssueStore<C>,
    directory: Directory,
    scoreboard: Scoreboard,
    rules: ScoringRules,
    catalog: RewardCatalog,
}

impl CivicService<SystemClock> {
    /// Create a service on wall-clock time.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> CivicService<C> {
    /// Create a service with a specific clock.
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            store: IssueStore::with_clock(config.sla.clone(), clock),
            directory: Directory::new(),
            scoreboard: Scoreboard::new(),
            rules: config.scoring.clone(),
            catalog: RewardCatalog::community_store(),
        }
    }

    /// Replace the reward catalog.
    pub fn with_catalog(mut self, catalog: RewardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn store(&self) -> &IssueStore<C> {
        &self.store
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    /// File a report on behalf of a registered user and award points.
    pub fn report_issue(&mut self, uid: &str, data: NewIssue) -> Result<Issue> {
        let reporter = self.directory.user(uid)?.as_reporter();
        let points = self.rules.points_for_report(data.is_emergency);

        let issue = self.store.create(data, reporter);
        let score = self.scoreboard.award(uid, points);

        info!(
            issue_id = %issue.id,
            uid,
            emergency = issue.is_emergency,
            points,
            score,
            "issue reported"
        );
        Ok(issue)
    }

    /// Assign a registered worker to an issue.
    pub fn assign_worker(&mut self, id: &IssueId, worker_id: &str) -> Result<Issue> {
        self.directory.worker(worker_id)?;
        let issue = self.store.update_assignment(id, worker_id)?;
        info!(issue_id = %id, worker_id, status = %issue.status, "worker assigned");
        Ok(issue)
    }

    /// Post a status update; resolving an issue pays the reporter once.
    pub fn post_update(&mut self, id: &IssueId, request: IssueUpdateRequest) -> Result<Issue> {
        let previous = self.store.status(id)?;
        let issue = self.store.append_update(id, request)?;

        if issue.status == IssueStatus::Resolved && previous != IssueStatus::Resolved {
            let uid = &issue.submitted_by.uid;
            let score = self.scoreboard.award(uid, self.rules.resolution_bonus);
            info!(issue_id = %id, uid = %uid, score, "issue resolved");
        } else {
            info!(issue_id = %id, status = %issue.status, "issue updated");
        }
        Ok(issue)
    }

    /// Extend an issue's SLA.
    pub fn extend_sla(&mut self, id: &IssueId, reason: &str) -> Result<Issue> {
        let (issue, outcome) = self.store.extend(id, reason)?;
        if outcome.escalated() && !issue.status.is_terminal() {
            warn!(issue_id = %id, reason, deadline = %outcome.new_deadline(), "issue escalated to head");
        } else {
            info!(issue_id = %id, reason, deadline = %outcome.new_deadline(), "sla extended");
        }
        Ok(issue)
    }

    /// All issues with current SLA status.
    pub fn issues(&self) -> Vec<Issue> {
        self.store.list()
    }

    /// One issue with current SLA status.
    pub fn issue(&self, id: &IssueId) -> Result<Issue> {
        self.store
            .get_by_id(id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    /// Issues filed by a citizen.
    pub fn issues_for_reporter(&self, uid: &str) -> Vec<Issue> {
        self.store.list_by_reporter(uid)
    }

    /// Issues assigned to a worker.
    pub fn issues_for_worker(&self, worker_id: &str) -> Vec<Issue> {
        self.store.list_by_worker(worker_id)
    }

    /// Registered workers.
    pub fn workers(&self) -> Vec<&Worker> {
        self.directory.workers()
    }

    /// A user's point balance.
    pub fn score(&self, uid: &str) -> u32 {
        self.scoreboard.score(uid)
    }

    /// Citizen leaderboard.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.scoreboard.leaderboard(&self.directory)
    }

    /// Redeem a catalog item, returning the remaining balance.
    pub fn redeem(&mut self, uid: &str, item: &str) -> Result<u32> {
        self.directory.user(uid)?;
        let cost = self.catalog.find(item)?.cost;
        let remaining = self.scoreboard.spend(uid, cost)?;
        info!(uid, item, cost, remaining, "reward redeemed");
        Ok(remaining)
    }

    /// SLA summary over all issues.
    pub fn sla_report(&self) -> SlaReport {
        let issues = self.store.list();
        SlaReporter::new(self.store.evaluator().clone()).generate(&issues, self.store.clock().now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ManualClock, Timestamp};
    use crate::directory::{AppUser, UserRole};
    use crate::issue::{Category, EmergencyCategory, IssueCategory, Location};
    use chrono::{Duration, TimeZone, Utc};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
    }

    fn service() -> CivicService<ManualClock> {
        let mut service = CivicService::with_clock(&Config::default(), ManualClock::new(t0()));
        let directory = service.directory_mut();
        directory.add_user(AppUser::new("citizen-1", "John Citizen", "citizen@test.com", UserRole::Citizen));
        directory.add_user(AppUser::new("citizen-2", "Jane Doe", "jane.doe@test.com", UserRole::Citizen));
        directory.add_user(AppUser::new("admin-1", "Waste Admin", "admin@test.com", UserRole::Admin));
        directory.add_worker(Worker::new("worker-1", "Suresh Kumar", "Ward 1"));
        service
    }

    fn report() -> NewIssue {
        NewIssue::new(
            "Garbage piling up near the park gate",
            Category::Routine(IssueCategory::GarbageAndWaste),
            Location { lat: 12.97, lng: 77.59 },
            "data:image/png;base64,AAAA",
        )
    }

    fn emergency() -> NewIssue {
        NewIssue::new(
            "Medical waste dumped on the roadside",
            Category::Emergency(EmergencyCategory::MedicalWaste),
            Location { lat: 12.97, lng: 77.59 },
            "data:image/png;base64,AAAA",
        )
    }

    #[test]
    fn test_report_awards_points() {
        let mut service = service();
        service.report_issue("citizen-1", report()).unwrap();
        assert_eq!(service.score("citizen-1"), 3);

        service.report_issue("citizen-1", emergency()).unwrap();
        assert_eq!(service.score("citizen-1"), 11);
    }

    #[test]
    fn test_report_unknown_user() {
        let mut service = service();
        let err = service.report_issue("ghost", report()).unwrap_err();
        assert!(matches!(err, Error::UserNotFound(_)));
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_assign_unknown_worker() {
        let mut service = service();
        let id = service.report_issue("citizen-1", report()).unwrap().id;
        let err = service.assign_worker(&id, "worker-9").unwrap_err();
        assert!(matches!(err, Error::WorkerNotFound(_)));
        assert_eq!(service.issue(&id).unwrap().status, IssueStatus::Submitted);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut service = service();
        let id = service.report_issue("citizen-1", report()).unwrap().id;

        let issue = service.assign_worker(&id, "worker-1").unwrap();
        assert_eq!(issue.status, IssueStatus::InProgress);
        assert_eq!(service.issues_for_worker("worker-1").len(), 1);

        service.store().clock().advance(Duration::hours(30));
        assert_eq!(service.issue(&id).unwrap().sla_status.label(), "At Risk");

        service
            .post_update(&id, IssueUpdateRequest::new(IssueStatus::Resolved, "Area cleaned"))
            .unwrap();
        assert_eq!(service.score("citizen-1"), 13);
        assert_eq!(service.issue(&id).unwrap().sla_status.label(), "On Time");

        // A second resolved remark does not pay again
        service
            .post_update(&id, IssueUpdateRequest::new(IssueStatus::Resolved, "Photo attached"))
            .unwrap();
        assert_eq!(service.score("citizen-1"), 13);
    }

    #[test]
    fn test_extend_and_escalate() {
        let mut service = service();
        let on_time = service.report_issue("citizen-1", report()).unwrap().id;
        let overdue = service.report_issue("citizen-2", report()).unwrap().id;

        service.store().clock().advance(Duration::hours(49));
        let issue = service.extend_sla(&on_time, "Awaiting truck").unwrap();
        assert_eq!(issue.sla_status.label(), "Extended");
        assert_eq!(issue.sla_deadline, t0() + Duration::hours(96));

        service.store().clock().advance(Duration::hours(60));
        let issue = service.extend_sla(&overdue, "Missed pickup").unwrap();
        assert_eq!(issue.sla_status.label(), "Escalated");

        let report = service.sla_report();
        assert_eq!(report.counts.extended, 1);
        assert_eq!(report.counts.escalated, 1);
        assert_eq!(report.escalated, vec![overdue]);
    }

    #[test]
    fn test_extend_resolved_issue() {
        let mut service = service();
        let id = service.report_issue("citizen-1", report()).unwrap().id;
        service
            .post_update(&id, IssueUpdateRequest::new(IssueStatus::Resolved, "Area cleaned"))
            .unwrap();
        service.store().clock().advance(Duration::hours(150));

        let issue = service.extend_sla(&id, "Audit request").unwrap();
        assert_eq!(issue.sla_status.label(), "On Time");
        assert_eq!(service.issue(&id).unwrap().sla_status.label(), "On Time");
        assert_eq!(service.sla_report().counts.escalated, 0);
    }

    #[test]
    fn test_post_update_missing_issue() {
        let mut service = service();
        let err = service
            .post_update(&IssueId::new("nope"), IssueUpdateRequest::new(IssueStatus::Resolved, "x"))
            .unwrap_err();
        assert!(matches!(err, Error::IssueNotFound(_)));
    }

    #[test]
    fn test_extend_missing_issue() {
        let mut service = service();
        let err = service.extend_sla(&IssueId::new("nope"), "x").unwrap_err();
        assert!(matches!(err, Error::IssueNotFound(_)));
    }

    #[test]
    fn test_redeem() {
        let mut service = service();
        for _ in 0..3 {
            service.report_issue("citizen-1", emergency()).unwrap();
        }
        assert_eq!(service.score("citizen-1"), 24);

        assert_eq!(service.redeem("citizen-1", "Biscuit Packet").unwrap(), 4);
        assert!(matches!(
            service.redeem("citizen-1", "Juice Box"),
            Err(Error::InsufficientPoints { .. })
        ));
        assert!(matches!(
            service.redeem("citizen-1", "Yacht"),
            Err(Error::RewardNotFound(_))
        ));
    }

    #[test]
    fn test_leaderboard() {
        let mut service = service();
        service.report_issue("citizen-2", emergency()).unwrap();
        service.report_issue("citizen-1", report()).unwrap();

        let board = service.leaderboard();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].uid, "citizen-2");
        assert_eq!(board[0].score, 8);
    }
}
