//! Member record repository.
//!
//! Every mutating method is a single statement so that the unique index over
//! `(organization_type, affiliation_scope, member_code, deletion_epoch)` is the only arbiter of
//! natural key collisions. A rejected statement leaves the table unchanged.

#[cfg(test)]
mod tests;

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::OrganizationType;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::member::CreateMemberDto;

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new instance of [`MemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active member
    ///
    /// The generated columns are left for the database to compute.
    pub async fn create(&self, member: CreateMemberDto) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let member = entity::member::ActiveModel {
            organization_type: ActiveValue::Set(member.organization_type),
            affiliation_id: ActiveValue::Set(member.affiliation_id),
            member_code: ActiveValue::Set(member.member_code),
            name: ActiveValue::Set(member.name),
            position: ActiveValue::Set(member.position),
            entry_date: ActiveValue::Set(member.entry_date),
            graduated_at: ActiveValue::Set(member.graduated_at),
            leave_at: ActiveValue::Set(member.leave_at),
            active_again_at: ActiveValue::Set(member.active_again_at),
            status: ActiveValue::Set(member.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    /// Gets a member by ID regardless of whether it has been soft-deleted
    pub async fn get_by_id(&self, member_id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(member_id)
            .one(self.db)
            .await
    }

    /// Applies the set fields of `changes` to an active member
    ///
    /// Returns the number of rows affected, 0 when the member does not exist or has been
    /// soft-deleted. `updated_at` is always refreshed.
    pub async fn update_active(
        &self,
        member_id: i32,
        mut changes: entity::member::ActiveModel,
    ) -> Result<u64, DbErr> {
        changes.id = ActiveValue::NotSet;
        changes.affiliation_scope = ActiveValue::NotSet;
        changes.deleted_at = ActiveValue::NotSet;
        changes.deletion_epoch = ActiveValue::NotSet;
        changes.created_at = ActiveValue::NotSet;
        changes.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let result = entity::prelude::Member::update_many()
            .set(changes)
            .filter(entity::member::Column::Id.eq(member_id))
            .filter(entity::member::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks an active member as deleted at the provided instant
    ///
    /// Returns the number of rows affected, 0 when the member does not exist or is already
    /// deleted.
    pub async fn soft_delete(&self, member_id: i32, at: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(entity::member::Column::DeletedAt, Expr::value(Some(at)))
            .col_expr(entity::member::Column::UpdatedAt, Expr::value(at))
            .filter(entity::member::Column::Id.eq(member_id))
            .filter(entity::member::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Clears the deletion marker of a soft-deleted member
    ///
    /// Returns the number of rows affected, 0 when the member does not exist or is not
    /// deleted. Fails with a unique constraint violation when another active member holds
    /// the same natural key.
    pub async fn restore(&self, member_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(
                entity::member::Column::DeletedAt,
                Expr::value(Option::<NaiveDateTime>::None),
            )
            .col_expr(
                entity::member::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::member::Column::Id.eq(member_id))
            .filter(entity::member::Column::DeletedAt.is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Lists members of a scope ordered by member code
    ///
    /// `affiliation_id` of `None` addresses members without an affiliation. Soft-deleted
    /// members are only included when `include_deleted` is set.
    pub async fn list(
        &self,
        organization_type: OrganizationType,
        affiliation_id: Option<i32>,
        include_deleted: bool,
    ) -> Result<Vec<entity::member::Model>, DbErr> {
        let mut scope = Condition::all()
            .add(entity::member::Column::OrganizationType.eq(organization_type))
            .add(match affiliation_id {
                Some(affiliation_id) => entity::member::Column::AffiliationId.eq(affiliation_id),
                None => entity::member::Column::AffiliationId.is_null(),
            });

        if !include_deleted {
            scope = scope.add(entity::member::Column::DeletedAt.is_null());
        }

        entity::prelude::Member::find()
            .filter(scope)
            .order_by_asc(entity::member::Column::MemberCode)
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await
    }
}
