//! Member fixture helpers.
//!
//! Records are written through the entity directly, bypassing the service layer, so tests can
//! set up states (such as soft-deleted history) without going through the code under test.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::OrganizationType;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, model::MemberModel, TestContext};

pub struct MemberFixtures<'a> {
    test: &'a TestContext,
}

impl TestContext {
    /// Access member fixture helpers.
    pub fn member(&self) -> MemberFixtures<'_> {
        MemberFixtures { test: self }
    }
}

impl<'a> MemberFixtures<'a> {
    /// Insert an active member with standard test values.
    ///
    /// # Arguments
    /// - `organization_type` - Scope tag of the member
    /// - `affiliation_id` - Optional affiliation record ID, must exist
    /// - `member_code` - Member code within the scope
    ///
    /// # Returns
    /// - `Ok(MemberModel)` - The inserted member, including generated columns
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the code is held by an active member
    pub async fn insert_member(
        &self,
        organization_type: OrganizationType,
        affiliation_id: Option<i32>,
        member_code: &str,
    ) -> Result<MemberModel, TestError> {
        let member =
            factory::mock_member_active_model(organization_type, affiliation_id, member_code);

        Ok(member.insert(&self.test.db).await?)
    }

    /// Insert a member that is already soft-deleted at the provided instant.
    ///
    /// The row is written with `deleted_at` set in a single insert, so it can sit next to an
    /// active member holding the same code.
    pub async fn insert_deleted_member(
        &self,
        organization_type: OrganizationType,
        affiliation_id: Option<i32>,
        member_code: &str,
        deleted_at: NaiveDateTime,
    ) -> Result<MemberModel, TestError> {
        let mut member =
            factory::mock_member_active_model(organization_type, affiliation_id, member_code);
        member.deleted_at = ActiveValue::Set(Some(deleted_at));
        member.updated_at = ActiveValue::Set(deleted_at);

        Ok(member.insert(&self.test.db).await?)
    }

    /// Fetch a member by ID in any state.
    pub async fn get_member(&self, member_id: i32) -> Result<Option<MemberModel>, TestError> {
        Ok(entity::prelude::Member::find_by_id(member_id)
            .one(&self.test.db)
            .await?)
    }
}
