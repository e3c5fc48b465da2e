use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{MemberStatus, OrganizationType};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a member record.
///
/// A soft-deleted member is kept in storage but hidden from default listings, the state
/// carries the deletion instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MemberState {
    Active,
    Deleted { at: NaiveDateTime },
}

impl MemberState {
    pub fn from_deleted_at(deleted_at: Option<NaiveDateTime>) -> Self {
        match deleted_at {
            None => Self::Active,
            Some(at) => Self::Deleted { at },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// The identity of a member within its scope.
///
/// Only one active member may hold a given key at a time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NaturalKey {
    pub organization_type: OrganizationType,
    pub affiliation_id: Option<i32>,
    pub member_code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub organization_type: OrganizationType,
    pub affiliation_id: Option<i32>,
    pub member_code: String,
    pub name: String,
    pub position: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub graduated_at: Option<NaiveDate>,
    pub leave_at: Option<NaiveDate>,
    pub active_again_at: Option<NaiveDate>,
    pub status: MemberStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(flatten)]
    pub state: MemberState,
}

impl MemberDto {
    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey {
            organization_type: self.organization_type,
            affiliation_id: self.affiliation_id,
            member_code: self.member_code.clone(),
        }
    }
}

/// Request body for creating a member
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMemberDto {
    pub organization_type: OrganizationType,
    #[serde(default)]
    pub affiliation_id: Option<i32>,
    /// Institution-assigned identifier, unique among active members of the scope
    pub member_code: String,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub graduated_at: Option<NaiveDate>,
    #[serde(default)]
    pub leave_at: Option<NaiveDate>,
    #[serde(default)]
    pub active_again_at: Option<NaiveDate>,
    #[serde(default)]
    pub status: MemberStatus,
}

/// Request body for updating a member
///
/// Absent fields are left untouched. For nullable fields an explicit `null` clears the value.
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateMemberDto {
    #[serde(default)]
    pub organization_type: Option<OrganizationType>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>)]
    pub affiliation_id: Option<Option<i32>>,
    #[serde(default)]
    pub member_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<NaiveDate>)]
    pub entry_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<NaiveDate>)]
    pub graduated_at: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<NaiveDate>)]
    pub leave_at: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<NaiveDate>)]
    pub active_again_at: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub status: Option<MemberStatus>,
}

/// Query parameters selecting the members of one scope
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberQuery {
    pub organization_type: OrganizationType,
    /// Omit to list members without an affiliation
    #[serde(default)]
    pub affiliation_id: Option<i32>,
    /// Include soft-deleted members
    #[serde(default)]
    pub include_deleted: bool,
}

// Distinguishes an explicit `null` from an absent field.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
