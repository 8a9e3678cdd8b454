//! Thread-safe handle around an [`AccountDirectory`].
use std::sync::Arc;

use account_directory_common::{Request, Response};
use parking_lot::Mutex;

use super::{AccountDirectory, TokenGenerator};
use crate::error::Result;
use crate::handlers;

/// Cloneable handle sharing one directory between threads.
///
/// Every call takes the same lock, so each operation is atomic with respect
/// to every other one. Use [`SharedDirectory::with`] to run several
/// operations as a single step.
#[derive(Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<Mutex<AccountDirectory>>,
}

impl SharedDirectory {
    pub fn new(directory: AccountDirectory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(directory)),
        }
    }

    pub fn with_token_generator(tokens: impl TokenGenerator + 'static) -> Self {
        Self::new(AccountDirectory::with_token_generator(tokens))
    }

    /// Run `f` with exclusive access to the directory
    pub fn with<R>(&self, f: impl FnOnce(&mut AccountDirectory) -> R) -> R {
        let mut directory = self.inner.lock();
        f(&mut directory)
    }

    pub fn create_account(&self, username: &str, password: &str) -> bool {
        self.inner.lock().create_account(username, password)
    }

    pub fn login(&self, username: &str, password: &str) -> bool {
        self.inner.lock().login(username, password)
    }

    pub fn user_exists(&self, username: &str) -> bool {
        self.inner.lock().user_exists(username)
    }

    pub fn user_logged_in(&self, username: &str) -> Result<bool> {
        self.inner.lock().user_logged_in(username)
    }

    pub fn logout_user(&self, username: &str) -> Result<()> {
        self.inner.lock().logout_user(username)
    }

    pub fn generate_token(&self, username: &str) -> Result<String> {
        self.inner.lock().generate_token(username)
    }

    pub fn change_password(&self, username: &str, token: &str, new_password: &str) -> Result<bool> {
        self.inner
            .lock()
            .change_password(username, token, new_password)
    }

    /// Execute a protocol request under the lock
    pub fn handle(&self, request: Request) -> Response {
        self.with(|directory| handlers::dispatch(directory, request))
    }
}
