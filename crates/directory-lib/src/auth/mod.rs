// ============================
// account-directory-lib/src/auth/mod.rs
// ============================
//! Accounts, sessions and password-reset tokens.

pub mod account;
pub mod session;
pub mod token;
mod directory;
mod shared;

pub use account::Account;
pub use directory::AccountDirectory;
pub use session::SessionSet;
pub use shared::SharedDirectory;
pub use token::{
    validate_token_format, FixedTokenGenerator, RandomTokenGenerator, ResetToken,
    SequenceTokenGenerator, TokenGenerator, TOKEN_LENGTH,
};
