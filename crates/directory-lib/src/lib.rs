// ============================
// account-directory-lib/src/lib.rs
// ============================
//! In-memory account directory: account creation, credential checks,
//! session tracking and one-time password-reset tokens.
//!
//! [`AccountDirectory`] is the single owner of all account state. Wrap it in
//! a [`SharedDirectory`] when several threads need to drive the same
//! directory; every operation then runs inside one critical section.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;

pub use auth::{
    validate_token_format, Account, AccountDirectory, FixedTokenGenerator,
    RandomTokenGenerator, ResetToken, SequenceTokenGenerator, SessionSet, SharedDirectory,
    TokenGenerator, TOKEN_LENGTH,
};
pub use config::{ConfigError, LogFormat, Settings};
pub use error::{DirectoryError, Result};
