//! Error types for the roster server.
//!
//! Each domain has its own error enum (configuration, affiliations, members) which is
//! aggregated into [`Error`]. All errors implement `IntoResponse` for Axum HTTP responses and
//! use `thiserror` for their `Display` and `Error` implementations.

/// Affiliation errors.
pub mod affiliation;
/// Configuration errors.
pub mod config;
/// Member record errors.
pub mod member;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{affiliation::AffiliationError, config::ConfigError, member::MemberError},
};

/// Main error type for the roster server.
///
/// Uses `thiserror`'s `#[from]` attribute so domain errors and storage errors convert with the
/// `?` operator. The `IntoResponse` implementation maps errors to HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Affiliation error (missing affiliation, duplicate name, invalid input).
    #[error(transparent)]
    AffiliationError(#[from] AffiliationError),
    /// Member error (not found, natural key collision, invalid input).
    #[error(transparent)]
    MemberError(#[from] MemberError),
    /// Internal error indicating a bug in roster's code.
    #[error("Internal error with roster's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error not translated into a domain error.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing members or affiliations
/// - 409 Conflict - For duplicate member codes or affiliation names
/// - 422 Unprocessable Entity - For input that fails validation
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AffiliationError(err) => err.into_response(),
            Self::MemberError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
