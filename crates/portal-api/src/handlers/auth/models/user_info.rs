//! User info model

use serde::Serialize;

/// Minimal user object embedded in login and verify responses
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User's unique identifier
    pub id: u64,
    /// Username
    pub username: String,
}
