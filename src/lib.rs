//! # civic-sla
//!
//! Civic issue tracking for municipal waste management:
//! - **Issues**: citizen reports, worker assignment and an append-only update log
//! - **SLA**: resolution deadlines with On Time / At Risk / Deadline Missed
//!   evaluation and sticky Extended / Escalated states
//! - **Scoring**: points for reports and resolutions, leaderboard, rewards
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use civic_sla::config::Config;
//! use civic_sla::directory::{AppUser, UserRole};
//! use civic_sla::issue::{Category, IssueCategory, Location, NewIssue};
//! use civic_sla::service::CivicService;
//!
//! let mut service = CivicService::new(&Config::default());
//! service.directory_mut().add_user(AppUser::new(
//!     "citizen-1",
//!     "John Citizen",
//!     "citizen@test.com",
//!     UserRole::Citizen,
//! ));
//!
//! let issue = service
//!     .report_issue(
//!         "citizen-1",
//!         NewIssue::new(
//!             "Overflowing bin",
//!             Category::Routine(IssueCategory::GarbageAndWaste),
//!             Location { lat: 19.07, lng: 72.87 },
//!             "https://example.com/bin.jpg",
//!         ),
//!     )
//!     .unwrap();
//! println!("{} is {}", issue.id, issue.sla_status);
//! ```

pub mod config;
pub mod core;
pub mod directory;
pub mod issue;
pub mod monitoring;
pub mod scoring;
pub mod service;
pub mod sla;

pub use crate::core::error::{Error, Result};
