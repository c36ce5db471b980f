//! Issue Module
//!
//! Citizen reports and their workflow:
//! - Issue records and update log
//! - In-memory repository with SLA-freshened reads

pub mod model;
pub mod store;

pub use model::{
    Category, EmergencyCategory, ImageRef, Issue, IssueCategory, IssueStatus, IssueUpdate,
    IssueUpdateRequest, Location, NewIssue, Reporter,
};
pub use store::IssueStore;
