//! Verify response model

use super::UserInfo;
use serde::Serialize;

/// Verify response body
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// Always true; failures use `AuthErrorResponse` instead
    pub valid: bool,
    /// Identity embedded in the validated token
    pub user: UserInfo,
}
