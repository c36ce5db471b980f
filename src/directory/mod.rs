//! Directory Module
//!
//! Application users and the field workers issues are assigned to.

pub mod registry;

pub use registry::{AppUser, Directory, UserRole, Worker};
