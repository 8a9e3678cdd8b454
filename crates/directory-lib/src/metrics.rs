// ==============
// crates/directory-lib/src/metrics.rs

//! Central place for metric keys
pub const ACCOUNT_CREATED: &str = "accounts.created";
pub const ACCOUNT_CREATE_REJECTED: &str = "accounts.create_rejected";
pub const ACCOUNTS_TOTAL: &str = "accounts.total";
pub const LOGIN_SUCCESS: &str = "login.success";
pub const LOGIN_FAILURE: &str = "login.failure";
pub const LOGOUT: &str = "logout";
pub const SESSIONS_ACTIVE: &str = "sessions.active";
pub const RESET_TOKEN_GENERATED: &str = "reset_token.generated";
pub const PASSWORD_CHANGED: &str = "password.changed";
pub const PASSWORD_CHANGE_REJECTED: &str = "password.change_rejected";
