//! Unit tests for reset-token generation and validation
use std::collections::HashSet;

use account_directory_lib::{
    validate_token_format, DirectoryError, RandomTokenGenerator, TokenGenerator, TOKEN_LENGTH,
};

#[test]
fn test_random_tokens_cover_every_digit() {
    let mut generator = RandomTokenGenerator::seeded(2024);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let token = generator.generate();
        assert_eq!(token.len(), TOKEN_LENGTH);
        seen.extend(token.chars());
    }
    // 600 uniform draws over ten digits
    assert_eq!(seen.len(), 10);
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = RandomTokenGenerator::seeded(1);
    let mut b = RandomTokenGenerator::seeded(2);
    let first: Vec<String> = (0..10).map(|_| a.generate()).collect();
    let second: Vec<String> = (0..10).map(|_| b.generate()).collect();
    assert_ne!(first, second);
}

#[test]
fn test_validate_token_format() {
    assert_eq!(validate_token_format("012345"), Ok("012345"));
    assert_eq!(
        validate_token_format("01234"),
        Err(DirectoryError::InvalidTokenFormat)
    );
    assert_eq!(
        validate_token_format("-12345"),
        Err(DirectoryError::InvalidTokenFormat)
    );
}
