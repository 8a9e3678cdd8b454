//! Stored credentials for a single account.
use std::fmt;

use zeroize::Zeroize;

/// A registered account. The username never changes after creation.
pub struct Account {
    username: String,
    password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact, case-sensitive comparison against the stored password
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Replace the password, wiping the previous one from memory
    pub fn set_password(&mut self, new_password: impl Into<String>) {
        let mut old = std::mem::replace(&mut self.password, new_password.into());
        old.zeroize();
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Drop for Account {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
