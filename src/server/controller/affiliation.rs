use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        affiliation::{AffiliationDto, CreateAffiliationDto},
        api::ErrorDto,
    },
    server::{error::Error, model::app::AppState, service::affiliation::AffiliationService},
};

/// OpenAPI tag of the affiliation endpoints
pub static AFFILIATION_TAG: &str = "affiliation";

/// Create an affiliation
#[utoipa::path(
    post,
    path = "/api/affiliations",
    tag = AFFILIATION_TAG,
    request_body = CreateAffiliationDto,
    responses(
        (status = 201, description = "Affiliation created", body = AffiliationDto),
        (status = 409, description = "Affiliation name already exists", body = ErrorDto),
        (status = 422, description = "Invalid affiliation name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_affiliation(
    State(state): State<AppState>,
    Json(affiliation): Json<CreateAffiliationDto>,
) -> Result<impl IntoResponse, Error> {
    let affiliation_service = AffiliationService::new(&state.db);

    let affiliation = affiliation_service.create(affiliation).await?;

    Ok((StatusCode::CREATED, Json(affiliation)))
}

/// List all affiliations ordered by name
#[utoipa::path(
    get,
    path = "/api/affiliations",
    tag = AFFILIATION_TAG,
    responses(
        (status = 200, description = "Success when listing affiliations", body = Vec<AffiliationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_affiliations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let affiliation_service = AffiliationService::new(&state.db);

    let affiliations = affiliation_service.list().await?;

    Ok((StatusCode::OK, Json(affiliations)))
}

/// Get an affiliation by ID
#[utoipa::path(
    get,
    path = "/api/affiliations/{id}",
    tag = AFFILIATION_TAG,
    params(("id" = i32, Path, description = "Affiliation ID")),
    responses(
        (status = 200, description = "Success when retrieving affiliation", body = AffiliationDto),
        (status = 404, description = "Affiliation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_affiliation(
    State(state): State<AppState>,
    Path(affiliation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let affiliation_service = AffiliationService::new(&state.db);

    let affiliation = affiliation_service.get(affiliation_id).await?;

    Ok((StatusCode::OK, Json(affiliation)))
}
