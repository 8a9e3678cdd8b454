// ============================
// account-directory-lib/src/auth/directory.rs
// ============================
//! The account directory state machine.
use std::collections::HashMap;
use std::fmt;

use metrics::{counter, gauge};
use tracing::{debug, warn};

use super::{Account, RandomTokenGenerator, ResetToken, SessionSet, TokenGenerator};
use super::token::validate_token_format;
use crate::error::{DirectoryError, Result};
use crate::metrics as keys;

/// Owns every account, the logged-in set and the reset-token slots.
///
/// A username appears in the session set or the token map only if it also
/// has an account. Accounts are never removed.
pub struct AccountDirectory {
    accounts: HashMap<String, Account>,
    sessions: SessionSet,
    reset_tokens: HashMap<String, ResetToken>,
    tokens: Box<dyn TokenGenerator>,
}

impl AccountDirectory {
    /// Create an empty directory that draws reset tokens from OS-seeded randomness
    pub fn new() -> Self {
        Self::with_token_generator(RandomTokenGenerator::new())
    }

    /// Create an empty directory using the given token source
    pub fn with_token_generator(tokens: impl TokenGenerator + 'static) -> Self {
        Self {
            accounts: HashMap::new(),
            sessions: SessionSet::new(),
            reset_tokens: HashMap::new(),
            tokens: Box::new(tokens),
        }
    }

    /// Register a new account, logged out and without a reset token.
    /// Returns `false` and changes nothing if the username is taken.
    pub fn create_account(&mut self, username: &str, password: &str) -> bool {
        if self.user_exists(username) {
            debug!(username, "account already exists");
            counter!(keys::ACCOUNT_CREATE_REJECTED).increment(1);
            return false;
        }

        self.accounts
            .insert(username.to_string(), Account::new(username, password));
        self.reset_tokens
            .insert(username.to_string(), ResetToken::none());

        debug!(username, "account created");
        counter!(keys::ACCOUNT_CREATED).increment(1);
        gauge!(keys::ACCOUNTS_TOTAL).set(self.accounts.len() as f64);
        true
    }

    /// Attempt a login. An unknown username is reported as `false`, not as
    /// an error.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let accepted = self
            .accounts
            .get(username)
            .is_some_and(|account| account.password_matches(password));

        if accepted {
            self.sessions.open(username);
            debug!(username, "login accepted");
            counter!(keys::LOGIN_SUCCESS).increment(1);
            gauge!(keys::SESSIONS_ACTIVE).set(self.sessions.len() as f64);
        } else {
            debug!(username, "login rejected");
            counter!(keys::LOGIN_FAILURE).increment(1);
        }
        accepted
    }

    pub fn user_exists(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn user_logged_in(&self, username: &str) -> Result<bool> {
        self.require(username)?;
        Ok(self.sessions.is_open(username))
    }

    /// Log a user out. Logging out a user who is not logged in is fine.
    pub fn logout_user(&mut self, username: &str) -> Result<()> {
        self.require(username)?;
        if self.sessions.close(username) {
            debug!(username, "logged out");
            counter!(keys::LOGOUT).increment(1);
            gauge!(keys::SESSIONS_ACTIVE).set(self.sessions.len() as f64);
        }
        Ok(())
    }

    /// Issue a fresh reset token for a user, invalidating any earlier one.
    ///
    /// The token is returned so the caller can deliver it to the user.
    /// Fails with [`DirectoryError::InvalidTokenFormat`] if the configured
    /// generator produced something other than six digits.
    pub fn generate_token(&mut self, username: &str) -> Result<String> {
        self.require(username)?;

        let token = self.tokens.generate();
        if validate_token_format(&token).is_err() {
            warn!(username, "token generator produced a malformed token");
            return Err(DirectoryError::InvalidTokenFormat);
        }

        self.reset_tokens
            .entry(username.to_string())
            .or_default()
            .issue(token.clone());

        debug!(username, "reset token issued");
        counter!(keys::RESET_TOKEN_GENERATED).increment(1);
        Ok(token)
    }

    /// Change a password using the user's active reset token.
    ///
    /// Checks run in order: the account must exist, the token must be six
    /// digits, a token must be active, and it must match exactly. A
    /// successful change consumes the token.
    pub fn change_password(
        &mut self,
        username: &str,
        token: &str,
        new_password: &str,
    ) -> Result<bool> {
        self.require(username)?;
        validate_token_format(token)?;

        let slot = self.reset_tokens.entry(username.to_string()).or_default();
        if !slot.matches(token) {
            debug!(username, active = slot.is_active(), "password change rejected");
            counter!(keys::PASSWORD_CHANGE_REJECTED).increment(1);
            return Ok(false);
        }
        slot.clear();

        if let Some(account) = self.accounts.get_mut(username) {
            account.set_password(new_password);
        }

        debug!(username, "password changed");
        counter!(keys::PASSWORD_CHANGED).increment(1);
        Ok(true)
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number of users currently logged in
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    fn require(&self, username: &str) -> Result<()> {
        if self.user_exists(username) {
            Ok(())
        } else {
            Err(DirectoryError::UserNotFound(username.to_string()))
        }
    }
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccountDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountDirectory")
            .field("accounts", &self.accounts.len())
            .field("sessions", &self.sessions.len())
            .finish_non_exhaustive()
    }
}
