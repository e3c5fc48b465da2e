//! HTTP controller endpoints for the roster web API.
//!
//! Axum handlers for affiliations and member records. Controllers extract path, query, and body
//! inputs, delegate to the services, and return JSON responses. Errors are converted into HTTP
//! responses by [`crate::server::error::Error`]. Every handler carries a utoipa annotation for
//! the OpenAPI document.

/// Affiliation endpoints.
pub mod affiliation;
/// Member endpoints.
pub mod member;
