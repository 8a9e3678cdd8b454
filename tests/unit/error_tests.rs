//! Unit tests for the error module
use account_directory_common::Response;
use account_directory_lib::DirectoryError;

#[test]
fn test_error_metadata() {
    let not_found = DirectoryError::UserNotFound("ghost".to_string());
    assert_eq!(not_found.status_code().as_u16(), 404);
    assert_eq!(not_found.error_code(), "USER_001");
    assert_eq!(not_found.sanitized_message(), "Resource not found");

    let bad_token = DirectoryError::InvalidTokenFormat;
    assert_eq!(bad_token.status_code().as_u16(), 400);
    assert_eq!(bad_token.error_code(), "TOKEN_001");
}

#[test]
fn test_error_to_protocol_response() {
    let response: Response = DirectoryError::UserNotFound("ghost".to_string()).into();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "USER_001");
    assert_eq!(json["message"], "User not found: ghost");
}
