// ============================
// account-directory-lib/src/auth/session.rs
// ============================
//! Logged-in state tracking.
use std::collections::HashSet;

/// Usernames that are currently logged in. Absence means logged out.
#[derive(Debug, Default, Clone)]
pub struct SessionSet {
    active: HashSet<String>,
}

impl SessionSet {
    /// Create an empty session set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a user as logged in. Logging in twice is a no-op.
    pub fn open(&mut self, username: &str) {
        if !self.active.contains(username) {
            self.active.insert(username.to_string());
        }
    }

    /// Mark a user as logged out. Returns whether a session was open.
    pub fn close(&mut self, username: &str) -> bool {
        self.active.remove(username)
    }

    /// Whether a user is logged in
    pub fn is_open(&self, username: &str) -> bool {
        self.active.contains(username)
    }

    /// Number of open sessions
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
