use entity::sea_orm_active_enums::{MemberStatus, OrganizationType};
use roster_test_utils::prelude::*;

use crate::{
    model::member::{CreateMemberDto, MemberQuery, MemberState, UpdateMemberDto},
    server::{
        error::{member::MemberError, Error},
        service::member::MemberService,
    },
};


/// Builds a create request with standard test values
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
        entry_date: Some(factory::mock_entry_date()),
        graduated_at: None,
        leave_at: None,
        active_again_at: None,
        status: MemberStatus::Active,
    }
}

fn scope(organization_type: OrganizationType, affiliation_id: Option<i32>) -> MemberQuery {
    MemberQuery {
        organization_type,
        affiliation_id,
        include_deleted: false,
    }
}
