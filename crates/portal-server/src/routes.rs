//! HTTP route registration for the portal server.
//!
//! This module wires the Actix-Web application to the shared
//! `portal-api` route configuration so the server keeps its
//! entrypoint lightweight.

use actix_web::web;

/// Register all HTTP routes for the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    portal_api::configure_routes(cfg);
}
