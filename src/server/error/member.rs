use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::ActiveEnum;
use thiserror::Error;

use crate::{model::member::NaturalKey, server::error::error_response};

/// Failures of member record operations.
///
/// `ConstraintViolation` is kept apart from `Validation` so callers can tell a duplicate
/// member code from malformed input.
#[derive(Error, Debug)]
pub enum MemberError {
    /// The addressed member does not exist or is not in the state the operation requires.
    #[error("Member ID {0} not found")]
    NotFound(i32),
    /// Another active member already holds the natural key.
    #[error(
        "An active {} member with code {:?} already exists{}",
        .0.organization_type.to_value(),
        .0.member_code,
        display_affiliation(.0.affiliation_id)
    )]
    ConstraintViolation(NaturalKey),
    /// Input rejected before reaching storage.
    #[error("Invalid member: {0}")]
    Validation(String),
}

fn display_affiliation(affiliation_id: Option<i32>) -> String {
    match affiliation_id {
        Some(id) => format!(" for affiliation ID {}", id),
        None => String::new(),
    }
}

impl IntoResponse for MemberError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(member_id) => {
                tracing::debug!(member_id = %member_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Member not found")
            }
            Self::ConstraintViolation(ref key) => {
                tracing::debug!(
                    organization_type = %key.organization_type.to_value(),
                    affiliation_id = ?key.affiliation_id,
                    member_code = %key.member_code,
                    "{}",
                    self
                );

                error_response(
                    StatusCode::CONFLICT,
                    format!("Duplicate member code: {}", self),
                )
            }
            Self::Validation(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
        }
    }
}
