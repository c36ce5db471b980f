//! Citizen point balances and leaderboard.

use crate::core::{Error, Result};
use crate::directory::{Directory, UserRole};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub uid: String,
    pub name: String,
    pub avatar_url: String,
    pub score: u32,
}

/// Point balances keyed by user ID.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    scores: HashMap<String, u32>,
}

impl Scoreboard {
    /// Create an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance.
    pub fn score(&self, uid: &str) -> u32 {
        self.scores.get(uid).copied().unwrap_or(0)
    }

    /// Add points, returning the new balance.
    pub fn award(&mut self, uid: &str, points: u32) -> u32 {
        let score = self.scores.entry(uid.to_string()).or_insert(0);
        *score = score.saturating_add(points);
        *score
    }

    /// Deduct points, returning the new balance.
    pub fn spend(&mut self, uid: &str, points: u32) -> Result<u32> {
        let available = self.score(uid);
        if available < points {
            return Err(Error::InsufficientPoints {
                needed: points,
                available,
            });
        }
        let remaining = available - points;
        self.scores.insert(uid.to_string(), remaining);
        Ok(remaining)
    }

    /// Citizens ranked by score, ties broken by name.
    pub fn leaderboard(&self, directory: &Directory) -> Vec<LeaderboardEntry> {
        let mut citizens: Vec<_> = directory
            .users_with_role(UserRole::Citizen)
            .map(|user| (user, self.score(&user.uid)))
            .collect();
        citizens.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| a.name.cmp(&b.name)));

        citizens
            .into_iter()
            .enumerate()
            .map(|(i, (user, score))| LeaderboardEntry {
                rank: i + 1,
                uid: user.uid.clone(),
                name: user.name.clone(),
                avatar_url: user.avatar_url.clone(),
                score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::AppUser;

    #[test]
    fn test_award_and_spend() {
        let mut board = Scoreboard::new();
        assert_eq!(board.score("c1"), 0);
        assert_eq!(board.award("c1", 8), 8);
        assert_eq!(board.award("c1", 10), 18);

        let err = board.spend("c1", 20).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientPoints {
                needed: 20,
                available: 18
            }
        ));
        assert_eq!(board.spend("c1", 18).unwrap(), 0);
    }

    #[test]
    fn test_leaderboard_citizens_only() {
        let mut directory = Directory::new();
        directory.add_user(AppUser::new("admin", "Waste Admin", "admin@test.com", UserRole::Admin));
        directory.add_user(AppUser::new("c1", "Jane Doe", "jane@test.com", UserRole::Citizen));
        directory.add_user(AppUser::new("c2", "Anna Bell", "anna@test.com", UserRole::Citizen));
        directory.add_user(AppUser::new("c3", "Mary Smith", "mary@test.com", UserRole::Citizen));

        let mut board = Scoreboard::new();
        board.award("admin", 500);
        board.award("c1", 3);
        board.award("c2", 3);
        board.award("c3", 13);

        let rows = board.leaderboard(&directory);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Mary Smith", "Anna Bell", "Jane Doe"]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[2].score, 3);
    }
}
