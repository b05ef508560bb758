//! Token verification handler
//!
//! POST /verify - Validates a bearer token and returns the embedded identity

use actix_web::{web, HttpRequest, HttpResponse};
use portal_auth::{extract_bearer_token, validate_jwt_token, AuthSettings};

use super::map_auth_error_to_response;
use super::models::{UserInfo, VerifyResponse};

/// POST /verify
///
/// Extracts the bearer token from the Authorization header and validates
/// its signature, expiry, and issuer. Every validation failure maps to one
/// uniform 401 body; only a missing header gets a usage message, since no
/// token was presented to leak anything about.
pub async fn verify_handler(
    req: HttpRequest,
    settings: web::Data<AuthSettings>,
) -> HttpResponse {
    let token = match extract_bearer_token(&req) {
        Ok(t) => t,
        Err(err) => return map_auth_error_to_response(err),
    };

    let claims = match validate_jwt_token(&token, &settings.jwt_secret, &settings.trusted_issuers())
    {
        Ok(claims) => claims,
        Err(err) => return map_auth_error_to_response(err),
    };

    let user_id = match claims.user_id() {
        Ok(id) => id,
        Err(err) => return map_auth_error_to_response(err),
    };

    HttpResponse::Ok().json(VerifyResponse {
        valid: true,
        user: UserInfo {
            id: user_id,
            username: claims.username,
        },
    })
}
