use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Scope tag partitioning members into separate programs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    #[sea_orm(string_value = "resident")]
    Resident,
    #[sea_orm(string_value = "fellow")]
    Fellow,
    #[sea_orm(string_value = "trainee")]
    Trainee,
    #[sea_orm(string_value = "peer_group")]
    PeerGroup,
    #[sea_orm(string_value = "staff")]
    Staff,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "graduated")]
    Graduated,
    #[sea_orm(string_value = "leave")]
    Leave,
}
