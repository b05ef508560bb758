//! Runtime auth settings shared by the HTTP handlers.

use crate::jwt::DEFAULT_JWT_EXPIRY_HOURS;
use serde::{Deserialize, Serialize};

/// Token signing and validation settings, injected into handlers as
/// `web::Data<AuthSettings>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Shared secret for HS256 signing. Never defaulted; the server fails
    /// startup when it is not configured.
    pub jwt_secret: String,
    /// Token validity window in hours
    pub jwt_expiry_hours: i64,
    /// Issuer stamped into and required from tokens
    pub issuer: String,
}

impl AuthSettings {
    pub fn new(jwt_secret: impl Into<String>, jwt_expiry_hours: i64, issuer: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            jwt_expiry_hours,
            issuer: issuer.into(),
        }
    }

    /// The issuers this deployment accepts. Single-issuer for now; the
    /// validator takes a slice so staged rollovers stay possible.
    pub fn trusted_issuers(&self) -> Vec<String> {
        vec![self.issuer.clone()]
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
            issuer: crate::jwt::PORTAL_ISSUER.to_string(),
        }
    }
}
