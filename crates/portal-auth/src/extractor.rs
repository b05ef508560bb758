//! HTTP request token extraction
//!
//! Pulls the bearer token out of the Authorization header. Validation of the
//! token itself lives in [`crate::jwt`].

use crate::error::{AuthError, AuthResult};
use actix_web::HttpRequest;

/// Extract a bearer token from the request's Authorization header.
///
/// # Errors
/// - `AuthError::MissingAuthorization` if the header is absent
/// - `AuthError::MalformedAuthorization` if the header is not valid ASCII,
///   does not use the Bearer scheme, or carries an empty token
pub fn extract_bearer_token(req: &HttpRequest) -> AuthResult<String> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| {
            AuthError::MissingAuthorization(
                "Authorization header is required. Use 'Authorization: Bearer <token>'"
                    .to_string(),
            )
        })?
        .to_str()
        .map_err(|_| {
            AuthError::MalformedAuthorization(
                "Authorization header contains invalid characters".to_string(),
            )
        })?;

    let token = auth_header
        .strip_prefix("Bearer")
        .ok_or_else(|| {
            AuthError::MalformedAuthorization(
                "Authorization header must use the Bearer scheme".to_string(),
            )
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MalformedAuthorization(
            "Bearer token missing".to_string(),
        ));
    }

    Ok(token.to_string())
}
