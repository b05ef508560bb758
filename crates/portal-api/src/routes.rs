//! API routes configuration
//!
//! Registers the login, verify, and healthcheck endpoints. Both auth
//! endpoints are POST-only; any other verb gets a 405 JSON body so every
//! error on the wire stays JSON. OPTIONS preflight is answered by the CORS
//! middleware before these routes are reached.

use crate::handlers;
use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::handlers::auth::models::AuthErrorResponse;

/// Configure routes for the portal API
///
/// - POST /login - Authenticate and issue a session token
/// - POST /verify - Validate a bearer token
/// - GET /healthcheck - Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::post().to(handlers::login_handler))
            .route(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/verify")
            .route(web::post().to(handlers::verify_handler))
            .route(web::route().to(method_not_allowed)),
    )
    .route("/healthcheck", web::get().to(healthcheck_handler));
}

/// Turn JSON body failures (missing field, bad JSON, length cap) into a 400
/// with the standard error body. Register via
/// `web::JsonConfig::default().error_handler(json_error_handler)`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(AuthErrorResponse::new("bad_request", err.to_string()));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Health check endpoint handler
async fn healthcheck_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unsupported verbs on the auth endpoints
async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .json(AuthErrorResponse::new("method_not_allowed", "Use POST for this endpoint"))
}
