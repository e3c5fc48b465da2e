use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{MemberStatus, OrganizationType};

/// A person enrolled in one organizational scope.
///
/// `affiliation_scope` and `deletion_epoch` are generated by the database and must never be
/// written from application code; they only exist so the scoped unique index can be built
/// over them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organization_type: OrganizationType,
    pub affiliation_id: Option<i32>,
    pub affiliation_scope: i32,
    pub member_code: String,
    pub name: String,
    pub position: Option<String>,
    pub entry_date: Option<Date>,
    pub graduated_at: Option<Date>,
    pub leave_at: Option<Date>,
    pub active_again_at: Option<Date>,
    pub status: MemberStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
    pub deletion_epoch: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::affiliation::Entity",
        from = "Column::AffiliationId",
        to = "super::affiliation::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Affiliation,
}

impl Related<super::affiliation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Affiliation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
