//! Authentication handlers
//!
//! ## Endpoints
//! - POST /login - Check the credential pair and issue a session token
//! - POST /verify - Validate a bearer token and return the embedded identity

pub mod models;

mod login;
mod verify;

pub use login::login_handler;
pub use verify::verify_handler;

use actix_web::HttpResponse;
use models::AuthErrorResponse;
use portal_auth::AuthError;

/// Map authentication errors to HTTP responses
///
/// Uses generic error messages to prevent user enumeration and token
/// probing: wrong password and unknown user share one body, and every token
/// validation failure (bad signature, expired, malformed, wrong issuer)
/// shares another.
pub(crate) fn map_auth_error_to_response(err: AuthError) -> HttpResponse {
    match err {
        AuthError::InvalidCredentials => HttpResponse::Unauthorized()
            .json(AuthErrorResponse::new("unauthorized", "Invalid username or password")),
        AuthError::MissingAuthorization(message) => {
            HttpResponse::Unauthorized().json(AuthErrorResponse::new("unauthorized", message))
        },
        AuthError::MalformedAuthorization(_)
        | AuthError::TokenExpired
        | AuthError::InvalidSignature
        | AuthError::UntrustedIssuer(_)
        | AuthError::MissingClaim(_) => HttpResponse::Unauthorized()
            .json(AuthErrorResponse::new("unauthorized", "Invalid or expired token")),
        AuthError::HashingError(_) => HttpResponse::InternalServerError()
            .json(AuthErrorResponse::new("internal_error", "Authentication failed")),
    }
}
