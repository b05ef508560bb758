//! Login response model

use super::UserInfo;
use serde::Serialize;

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Always true; failures use `AuthErrorResponse` instead
    pub success: bool,
    /// Signed JWT session token
    pub token: String,
    /// Token expiration time in RFC3339 format
    pub expires_at: String,
    /// User information
    pub user: UserInfo,
}
