// ================
// common/src/lib.rs
// ================
//! Request and response types shared between the account directory and the
//! front ends that drive it.
//!
//! A [`Request`] can be decoded from JSON or parsed from a single
//! whitespace-separated command line such as `login alice hunter2`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operations a front end can ask the directory to perform
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Register a new account
    CreateAccount { username: String, password: String },
    /// Attempt a login with the given credentials
    Login { username: String, password: String },
    /// Check whether an account exists
    UserExists { username: String },
    /// Check whether an account is logged in
    UserLoggedIn { username: String },
    /// End the session of an account
    LogoutUser { username: String },
    /// Issue a fresh password-reset token
    GenerateToken { username: String },
    /// Replace the password using a previously issued token
    ChangePassword {
        username: String,
        token: String,
        new_password: String,
    },
}

impl Request {
    /// Command-line keyword for this request
    pub fn command(&self) -> &'static str {
        match self {
            Request::CreateAccount { .. } => "create",
            Request::Login { .. } => "login",
            Request::UserExists { .. } => "exists",
            Request::UserLoggedIn { .. } => "logged-in",
            Request::LogoutUser { .. } => "logout",
            Request::GenerateToken { .. } => "token",
            Request::ChangePassword { .. } => "change-password",
        }
    }

    /// Username the request targets
    pub fn username(&self) -> &str {
        match self {
            Request::CreateAccount { username, .. }
            | Request::Login { username, .. }
            | Request::UserExists { username }
            | Request::UserLoggedIn { username }
            | Request::LogoutUser { username }
            | Request::GenerateToken { username }
            | Request::ChangePassword { username, .. } => username,
        }
    }
}

/// Reasons a command line could not be turned into a [`Request`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRequestError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("`{command}` takes {expected} argument(s), got {got}")]
    WrongArity {
        command: String,
        expected: usize,
        got: usize,
    },
}

fn expect_args<const N: usize>(
    command: &str,
    args: &[&str],
) -> Result<[String; N], ParseRequestError> {
    let words: [&str; N] = args
        .try_into()
        .map_err(|_| ParseRequestError::WrongArity {
            command: command.to_string(),
            expected: N,
            got: args.len(),
        })?;
    Ok(words.map(str::to_string))
}

impl FromStr for Request {
    type Err = ParseRequestError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseRequestError::Empty)?;
        let args: Vec<&str> = words.collect();

        let request = match command {
            "create" => {
                let [username, password] = expect_args::<2>(command, &args)?;
                Request::CreateAccount { username, password }
            }
            "login" => {
                let [username, password] = expect_args::<2>(command, &args)?;
                Request::Login { username, password }
            }
            "exists" => {
                let [username] = expect_args::<1>(command, &args)?;
                Request::UserExists { username }
            }
            "logged-in" => {
                let [username] = expect_args::<1>(command, &args)?;
                Request::UserLoggedIn { username }
            }
            "logout" => {
                let [username] = expect_args::<1>(command, &args)?;
                Request::LogoutUser { username }
            }
            "token" => {
                let [username] = expect_args::<1>(command, &args)?;
                Request::GenerateToken { username }
            }
            "change-password" => {
                let [username, token, new_password] = expect_args::<3>(command, &args)?;
                Request::ChangePassword {
                    username,
                    token,
                    new_password,
                }
            }
            other => return Err(ParseRequestError::UnknownCommand(other.to_string())),
        };

        Ok(request)
    }
}

/// Result of a request, as reported back to the front end
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    /// Boolean outcome (account created, login accepted, password changed, ...)
    Answer { value: bool },
    /// Operation completed with nothing to report
    Done,
    /// A freshly issued reset token
    Token { token: String },
    /// Operation failed
    Error {
        /// Stable error code
        code: String,
        /// Human-readable description
        message: String,
    },
}

impl Response {
    /// Render as a single JSON line
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Answer { value } => write!(f, "{value}"),
            Response::Done => write!(f, "ok"),
            Response::Token { token } => write!(f, "token {token}"),
            Response::Error { code, message } => write!(f, "error {code}: {message}"),
        }
    }
}
