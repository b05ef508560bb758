//! Login handler
//!
//! POST /login - Checks the credential pair and returns a signed session token

use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use portal_auth::{authenticate, create_and_sign_token, AuthSettings, CredentialStore};
use std::sync::Arc;

use super::map_auth_error_to_response;
use super::models::{AuthErrorResponse, LoginRequest, LoginResponse, UserInfo};

/// POST /login
///
/// Authenticates a username/password pair against the configured credential
/// store and returns a signed JWT on success. Unknown user and wrong
/// password produce the same 401 body.
pub async fn login_handler(
    store: web::Data<Arc<dyn CredentialStore>>,
    settings: web::Data<AuthSettings>,
    body: web::Json<LoginRequest>,
) -> HttpResponse {
    let credential = match authenticate(&body.username, &body.password, store.get_ref()).await {
        Ok(credential) => credential,
        Err(err) => return map_auth_error_to_response(err),
    };

    let (token, _claims) = match create_and_sign_token(
        credential.user_id,
        &credential.username,
        &settings.issuer,
        Some(settings.jwt_expiry_hours),
        &settings.jwt_secret,
    ) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Error generating JWT: {}", e);
            return HttpResponse::InternalServerError()
                .json(AuthErrorResponse::new("internal_error", "Failed to generate token"));
        },
    };

    let expires_at = Utc::now() + Duration::hours(settings.jwt_expiry_hours);

    HttpResponse::Ok().json(LoginResponse {
        success: true,
        token,
        expires_at: expires_at.to_rfc3339(),
        user: UserInfo {
            id: credential.user_id,
            username: credential.username,
        },
    })
}
