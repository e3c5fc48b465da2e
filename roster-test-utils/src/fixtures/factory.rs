//! Factory functions for generating mock member and affiliation models.
//!
//! Pure functions returning in-memory values with standard test data, no database access.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{MemberStatus, OrganizationType};
use sea_orm::ActiveValue;

use crate::model::{AffiliationModel, MemberModel};

/// Standard entry date used by mock members.
pub fn mock_entry_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default()
}

/// Create an unsaved active member with standard test values.
///
/// Generated columns are left `NotSet` for the database to fill in.
pub fn mock_member_active_model(
    organization_type: OrganizationType,
    affiliation_id: Option<i32>,
    member_code: &str,
) -> entity::member::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::member::ActiveModel {
        organization_type: ActiveValue::Set(organization_type),
        affiliation_id: ActiveValue::Set(affiliation_id),
        member_code: ActiveValue::Set(member_code.to_string()),
        name: ActiveValue::Set(format!("Member {}", member_code)),
        position: ActiveValue::Set(Some("PGY-1".to_string())),
        entry_date: ActiveValue::Set(Some(mock_entry_date())),
        graduated_at: ActiveValue::Set(None),
        leave_at: ActiveValue::Set(None),
        active_again_at: ActiveValue::Set(None),
        status: ActiveValue::Set(MemberStatus::Active),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Create an in-memory active member model.
///
/// Mirrors what the database would generate for an active row: `deletion_epoch` is `"0"` and
/// `affiliation_scope` falls back to 0 without an affiliation.
pub fn mock_member_model(
    id: i32,
    organization_type: OrganizationType,
    affiliation_id: Option<i32>,
    member_code: &str,
) -> MemberModel {
    let now = Utc::now().naive_utc();

    MemberModel {
        id,
        organization_type,
        affiliation_id,
        affiliation_scope: affiliation_id.unwrap_or(0),
        member_code: member_code.to_string(),
        name: format!("Member {}", member_code),
        position: Some("PGY-1".to_string()),
        entry_date: Some(mock_entry_date()),
        graduated_at: None,
        leave_at: None,
        active_again_at: None,
        status: MemberStatus::Active,
        created_at: now,
        updated_at: now,
        deleted_at: None,
        deletion_epoch: "0".to_string(),
    }
}

/// Create an in-memory affiliation model.
pub fn mock_affiliation_model(id: i32, name: &str) -> AffiliationModel {
    let now = Utc::now().naive_utc();

    AffiliationModel {
        id,
        name: name.to_string(),
        created_at: now,
        updated_at: now,
    }
}
