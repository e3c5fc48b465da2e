use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures of affiliation operations.
#[derive(Error, Debug)]
pub enum AffiliationError {
    /// No affiliation with this ID.
    #[error("Affiliation ID {0} not found")]
    NotFound(i32),
    /// Affiliation names are unique.
    #[error("An affiliation named {0:?} already exists")]
    DuplicateName(String),
    /// Input rejected before reaching storage.
    #[error("Invalid affiliation: {0}")]
    Validation(String),
}

impl IntoResponse for AffiliationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateName(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        error_response(status, self.to_string())
    }
}
