// ============================
// crates/directory-lib/src/handlers.rs
// ============================
//! Maps protocol requests onto directory operations.
use account_directory_common::{Request, Response};
use tracing::debug;

use crate::auth::AccountDirectory;

/// Execute one request against the directory.
///
/// Boolean outcomes become [`Response::Answer`], errors become
/// [`Response::Error`] carrying the stable error code.
pub fn dispatch(directory: &mut AccountDirectory, request: Request) -> Response {
    debug!(command = request.command(), username = request.username(), "dispatching request");

    let outcome = match request {
        Request::CreateAccount { username, password } => Ok(Response::Answer {
            value: directory.create_account(&username, &password),
        }),
        Request::Login { username, password } => Ok(Response::Answer {
            value: directory.login(&username, &password),
        }),
        Request::UserExists { username } => Ok(Response::Answer {
            value: directory.user_exists(&username),
        }),
        Request::UserLoggedIn { username } => directory
            .user_logged_in(&username)
            .map(|value| Response::Answer { value }),
        Request::LogoutUser { username } => {
            directory.logout_user(&username).map(|()| Response::Done)
        }
        Request::GenerateToken { username } => directory
            .generate_token(&username)
            .map(|token| Response::Token { token }),
        Request::ChangePassword {
            username,
            token,
            new_password,
        } => directory
            .change_password(&username, &token, &new_password)
            .map(|value| Response::Answer { value }),
    };

    outcome.unwrap_or_else(Response::from)
}
