//! Unit tests for password hashing and verification
//!
//! Tests cover:
//! - Password hashing with bcrypt
//! - Password verification
//! - Edge cases (case sensitivity, unicode, malformed hashes)

use portal_auth::password::{hash_password, verify_password};

/// Test basic password hashing functionality
#[tokio::test]
async fn test_hash_password() {
    let password = "SecurePassword123!";
    let hash = hash_password(password, None).await.unwrap();

    // Verify hash format
    assert!(hash.starts_with("$2"), "Hash should be bcrypt format");
    assert!(hash.len() > 50, "Hash should be sufficiently long");

    // Verify hash is different each time (due to random salt)
    let hash2 = hash_password(password, None).await.unwrap();
    assert_ne!(hash, hash2, "Each hash should have unique salt");
}

/// Test password verification with correct password
#[tokio::test]
async fn test_verify_password_correct() {
    let password = "MyTestPassword2024!";
    let hash = hash_password(password, Some(4)).await.unwrap(); // Low cost for faster tests

    let result = verify_password(password, &hash).await.unwrap();
    assert!(result, "Correct password should verify successfully");
}

/// Test password verification with wrong password
#[tokio::test]
async fn test_verify_password_wrong() {
    let password = "CorrectPassword123!";
    let wrong_password = "WrongPassword456!";
    let hash = hash_password(password, Some(4)).await.unwrap();

    let result = verify_password(wrong_password, &hash).await.unwrap();
    assert!(!result, "Wrong password should not verify");
}

/// Test password verification is case-sensitive
#[tokio::test]
async fn test_verify_password_case_sensitive() {
    let password = "CaseSensitive123!";
    let hash = hash_password(password, Some(4)).await.unwrap();

    let wrong_case = "casesensitive123!";
    let result = verify_password(wrong_case, &hash).await.unwrap();
    assert!(!result, "Password verification should be case-sensitive");
}

/// Unicode passwords must hash and verify cleanly
#[tokio::test]
async fn test_verify_password_unicode() {
    let password = "пароль-contraseña-密码";
    let hash = hash_password(password, Some(4)).await.unwrap();

    assert!(verify_password(password, &hash).await.unwrap());
    assert!(!verify_password("other", &hash).await.unwrap());
}

/// A stored hash that is not a bcrypt string must error, not silently fail
#[tokio::test]
async fn test_verify_password_malformed_hash() {
    let result = verify_password("anything", "not-a-bcrypt-hash").await;
    assert!(result.is_err(), "Malformed hash should be an error");
}
