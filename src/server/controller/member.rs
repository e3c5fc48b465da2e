use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{CreateMemberDto, MemberDto, MemberQuery, UpdateMemberDto},
    },
    server::{error::Error, model::app::AppState, service::member::MemberService},
};

/// OpenAPI tag of the member endpoints
pub static MEMBER_TAG: &str = "member";

/// Create an active member
///
/// Fails with 409 when an active member already holds the same member code within the
/// organization type and affiliation.
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 409, description = "Duplicate member code within scope", body = ErrorDto),
        (status = 422, description = "Invalid member fields or unknown affiliation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(member): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let member_service = MemberService::new(&state.db);

    let member = member_service.create(member).await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// List the members of a scope
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    params(MemberQuery),
    responses(
        (status = 200, description = "Success when listing members", body = Vec<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<MemberQuery>,
) -> Result<impl IntoResponse, Error> {
    let member_service = MemberService::new(&state.db);

    let members = member_service.list(query).await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Get a member by ID, active or deleted
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Success when retrieving member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let member_service = MemberService::new(&state.db);

    let member = member_service.get(member_id).await?;

    Ok((StatusCode::OK, Json(member)))
}

/// Update an active member
///
/// Absent fields are left untouched, explicit `null` clears a nullable field.
#[utoipa::path(
    patch,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 404, description = "Active member not found", body = ErrorDto),
        (status = 409, description = "Duplicate member code within scope", body = ErrorDto),
        (status = 422, description = "Invalid member fields or unknown affiliation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
    Json(changes): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let member_service = MemberService::new(&state.db);

    let member = member_service.update(member_id, changes).await?;

    Ok((StatusCode::OK, Json(member)))
}

/// Soft-delete an active member
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = MemberDto),
        (status = 404, description = "Active member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let member_service = MemberService::new(&state.db);

    let member = member_service.soft_delete(member_id).await?;

    Ok((StatusCode::OK, Json(member)))
}

/// Restore a soft-deleted member
///
/// Fails with 409 when another active member has claimed the member code since deletion.
#[utoipa::path(
    post,
    path = "/api/members/{id}/restore",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member restored", body = MemberDto),
        (status = 404, description = "Deleted member not found", body = ErrorDto),
        (status = 409, description = "Member code was reclaimed by an active member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn restore_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let member_service = MemberService::new(&state.db);

    let member = member_service.restore(member_id).await?;

    Ok((StatusCode::OK, Json(member)))
}
