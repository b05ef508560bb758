//! Portal API
//!
//! actix-web handlers, request/response models, and route registration for
//! the login service.

pub mod handlers;
pub mod routes;

pub use routes::{configure_routes, json_error_handler};
