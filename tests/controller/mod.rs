//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors against an in-memory database with the
//! full schema applied, verifying status codes and response bodies.

mod affiliation;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{MemberStatus, OrganizationType};
use roster::{
    model::{
        api::ErrorDto,
        member::{CreateMemberDto, MemberDto, MemberQuery, MemberState, UpdateMemberDto},
    },
    server::model::app::AppState,
};
use roster_test_utils::prelude::*;

use crate::util::read_json;

fn create_dto(
    organization_type: OrganizationType,
    affiliation_id: Option<i32>,
    member_code: &str,
) -> CreateMemberDto {
    CreateMemberDto {
        organization_type,
        affiliation_id,
        member_code: member_code.to_string(),
        name: format!("Member {}", member_code),
        position: None,
        entry_date: None,
        graduated_at: None,
        leave_at: None,
        active_again_at: None,
        status: MemberStatus::Active,
    }
}
