//! User and worker registry.

use crate::core::{Error, Result};
use crate::issue::Reporter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role of an application user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Citizen,
    Admin,
    /// Receives escalated issues
    Head,
    Worker,
    /// Purchases segregated waste
    Buyer,
}

/// An application user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUser {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: String,
    pub mobile_number: Option<String>,
}

impl AppUser {
    /// Create a new user.
    pub fn new(uid: &str, name: &str, email: &str, role: UserRole) -> Self {
        Self {
            uid: uid.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar_url: format!("https://picsum.photos/seed/{}/100/100", uid),
            mobile_number: None,
        }
    }

    /// Set mobile number.
    pub fn with_mobile(mut self, mobile: &str) -> Self {
        self.mobile_number = Some(mobile.to_string());
        self
    }

    /// Reporter details for an issue filed by this user.
    pub fn as_reporter(&self) -> Reporter {
        Reporter {
            uid: self.uid.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// A field worker who can be assigned issues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    /// Service area
    pub area: String,
    pub avatar_url: String,
}

impl Worker {
    /// Create a new worker.
    pub fn new(id: &str, name: &str, area: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            area: area.to_string(),
            avatar_url: format!("https://picsum.photos/seed/{}/100/100", id),
        }
    }
}

/// Registry of users and workers.
#[derive(Default)]
pub struct Directory {
    users: HashMap<String, AppUser>,
    workers: HashMap<String, Worker>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user.
    pub fn add_user(&mut self, user: AppUser) {
        self.users.insert(user.uid.clone(), user);
    }

    /// Add or replace a worker.
    pub fn add_worker(&mut self, worker: Worker) {
        self.workers.insert(worker.id.clone(), worker);
    }

    /// Look up a user.
    pub fn user(&self, uid: &str) -> Result<&AppUser> {
        self.users
            .get(uid)
            .ok_or_else(|| Error::UserNotFound(uid.to_string()))
    }

    /// Look up a worker.
    pub fn worker(&self, id: &str) -> Result<&Worker> {
        self.workers
            .get(id)
            .ok_or_else(|| Error::WorkerNotFound(id.to_string()))
    }

    /// All workers, ordered by ID.
    pub fn workers(&self) -> Vec<&Worker> {
        let mut workers: Vec<&Worker> = self.workers.values().collect();
        workers.sort_by(|a, b| a.id.cmp(&b.id));
        workers
    }

    /// Users with a given role.
    pub fn users_with_role(&self, role: UserRole) -> impl Iterator<Item = &AppUser> {
        self.users.values().filter(move |u| u.role == role)
    }
}
