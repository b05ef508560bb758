//! HTTP request handlers

pub mod auth;

pub use auth::{login_handler, verify_handler};
