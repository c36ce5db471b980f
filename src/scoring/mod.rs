//! Scoring Module
//!
//! Citizen engagement rewards:
//! - Point rules for reports and resolutions
//! - Balances and leaderboard
//! - Community store catalog

pub mod rewards;
pub mod rules;
pub mod scoreboard;

pub use rewards::{RewardCatalog, RewardItem};
pub use rules::ScoringRules;
pub use scoreboard::{LeaderboardEntry, Scoreboard};
