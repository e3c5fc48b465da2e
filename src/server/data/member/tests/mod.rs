use entity::sea_orm_active_enums::{MemberStatus, OrganizationType};
use roster_test_utils::prelude::*;
use sea_orm::{ActiveValue, SqlErr};

use crate::{model::member::CreateMemberDto, server::data::member::MemberRepository};


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
