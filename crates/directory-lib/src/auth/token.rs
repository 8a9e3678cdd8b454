// ============================
// crates/directory-lib/src/auth/token.rs
// ============================
/*! Password-reset token generation and validation.

Tokens are six decimal digits. Generation goes through the [`TokenGenerator`]
trait so callers can swap the random source for a deterministic one. */
use std::fmt;
use std::sync::LazyLock;

use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use crate::error::{DirectoryError, Result};

/// Number of digits in a reset token
pub const TOKEN_LENGTH: usize = 6;

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Check that a token consists of exactly six ASCII digits
pub fn validate_token_format(token: &str) -> Result<&str> {
    if TOKEN_REGEX.is_match(token) {
        Ok(token)
    } else {
        Err(DirectoryError::InvalidTokenFormat)
    }
}

/// Source of fresh reset tokens
pub trait TokenGenerator: Send {
    /// Produce a six-digit token
    fn generate(&mut self) -> String;
}

impl<F> TokenGenerator for F
where
    F: FnMut() -> String + Send,
{
    fn generate(&mut self) -> String {
        self()
    }
}

/** Pseudo-random token generator.
Each digit is drawn uniformly from 0-9, so leading zeros occur. The
generator is not hardened against prediction: seeding it makes the token
stream fully reproducible. */
pub struct RandomTokenGenerator {
    rng: StdRng,
}

impl RandomTokenGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generator with a fixed seed, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&mut self) -> String {
        (0..TOKEN_LENGTH)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect()
    }
}

/// Always hands out the same token
#[derive(Debug, Clone)]
pub struct FixedTokenGenerator {
    token: String,
}

impl FixedTokenGenerator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenGenerator for FixedTokenGenerator {
    fn generate(&mut self) -> String {
        self.token.clone()
    }
}

/// Hands out tokens from a list in order, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceTokenGenerator {
    tokens: Vec<String>,
    next: usize,
}

impl SequenceTokenGenerator {
    /// Panics if `tokens` is empty.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        assert!(!tokens.is_empty(), "token sequence must not be empty");
        Self { tokens, next: 0 }
    }
}

impl TokenGenerator for SequenceTokenGenerator {
    fn generate(&mut self) -> String {
        let token = self.tokens[self.next].clone();
        self.next = (self.next + 1) % self.tokens.len();
        token
    }
}

/// Reset-token slot of one account: either empty or holding an active token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResetToken(String);

impl ResetToken {
    /// The empty slot
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }

    /// Replace whatever token was held
    pub fn issue(&mut self, token: String) {
        self.0 = token;
    }

    /// An empty slot never matches, not even an empty candidate
    pub fn matches(&self, candidate: &str) -> bool {
        self.is_active() && self.0 == candidate
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Debug for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_active() {
            f.write_str("ResetToken(<active>)")
        } else {
            f.write_str("ResetToken(<none>)")
        }
    }
}
