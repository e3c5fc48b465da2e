//! Member record service.
//!
//! Implements the lifecycle of member records: create, update, soft delete, restore, and
//! scoped listing. The natural key `(organization_type, affiliation_id, member_code)` is
//! unique among active members only; that rule is enforced by the unique index created in the
//! migrations and this service never pre-checks it with a read. Storage errors raised by the
//! index are translated into [`MemberError::ConstraintViolation`].

/// Normalization and validation of member fields.
pub mod validate;

#[cfg(test)]
mod tests;

use chrono::Utc;
use sea_orm::{ActiveEnum, DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::member::{
        CreateMemberDto, MemberDto, MemberQuery, MemberState, NaturalKey, UpdateMemberDto,
    },
    server::{
        data::{affiliation::AffiliationRepository, member::MemberRepository},
        error::{member::MemberError, Error},
        model::db::MemberModel,
        service::member::validate::MemberFields,
    },
};

impl From<MemberModel> for MemberDto {
    fn from(model: MemberModel) -> Self {
        Self {
            id: model.id,
            organization_type: model.organization_type,
            affiliation_id: model.affiliation_id,
            member_code: model.member_code,
            name: model.name,
            position: model.position,
            entry_date: model.entry_date,
            graduated_at: model.graduated_at,
            leave_at: model.leave_at,
            active_again_at: model.active_again_at,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
            state: MemberState::from_deleted_at(model.deleted_at),
        }
    }
}

/// Translates a failed write into the member error taxonomy.
///
/// `key` is the natural key the failed statement was writing.
fn storage_error(err: DbErr, key: &NaturalKey) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            MemberError::ConstraintViolation(key.clone()).into()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => MemberError::Validation(format!(
            "affiliation ID {:?} does not exist",
            key.affiliation_id
        ))
        .into(),
        _ => err.into(),
    }
}

/// Service for managing member records.
pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new instance of [`MemberService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active member.
    ///
    /// # Returns
    /// - `Ok(MemberDto)` - The created member
    /// - `Err(Error::MemberError(MemberError::ConstraintViolation))` - An active member of the
    ///   same scope already holds the member code
    /// - `Err(Error::MemberError(MemberError::Validation))` - Invalid fields or unknown affiliation
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, member: CreateMemberDto) -> Result<MemberDto, Error> {
        let fields = MemberFields::from(member).validate()?;
        self.ensure_affiliation_exists(fields.affiliation_id).await?;

        let key = fields.natural_key();
        let member_repo = MemberRepository::new(self.db);
        let member = member_repo
            .create(fields.into_create_dto())
            .await
            .map_err(|err| storage_error(err, &key))?;

        tracing::info!(
            member_id = %member.id,
            organization_type = %member.organization_type.to_value(),
            affiliation_id = ?member.affiliation_id,
            member_code = %member.member_code,
            "Created member"
        );

        Ok(member.into())
    }

    /// Retrieves a member by ID in either lifecycle state.
    ///
    /// # Returns
    /// - `Ok(MemberDto)` - The member, soft-deleted members included
    /// - `Err(Error::MemberError(MemberError::NotFound))` - No member with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, member_id: i32) -> Result<MemberDto, Error> {
        let member_repo = MemberRepository::new(self.db);

        member_repo
            .get_by_id(member_id)
            .await?
            .map(MemberDto::from)
            .ok_or_else(|| MemberError::NotFound(member_id).into())
    }

    /// Updates an active member.
    ///
    /// The update is validated against the member as it would look afterwards. Moving a member
    /// onto a natural key held by another active member fails with a constraint violation.
    ///
    /// # Returns
    /// - `Ok(MemberDto)` - The updated member
    /// - `Err(Error::MemberError(MemberError::NotFound))` - No active member with this ID
    /// - `Err(Error::MemberError(MemberError::ConstraintViolation))` - Natural key collision
    /// - `Err(Error::MemberError(MemberError::Validation))` - Invalid merged fields
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        member_id: i32,
        changes: UpdateMemberDto,
    ) -> Result<MemberDto, Error> {
        let member_repo = MemberRepository::new(self.db);
        let current = self.get_active_model(member_id).await?;

        let fields = MemberFields::from(&current).apply(&changes).validate()?;
        if fields.affiliation_id != current.affiliation_id {
            self.ensure_affiliation_exists(fields.affiliation_id).await?;
        }

        let key = fields.natural_key();
        let rows_affected = member_repo
            .update_active(member_id, fields.into_update_model(&changes))
            .await
            .map_err(|err| storage_error(err, &key))?;

        // Deleted between the read above and the update
        if rows_affected == 0 {
            return Err(MemberError::NotFound(member_id).into());
        }

        tracing::info!(member_id = %member_id, "Updated member");

        self.get_written_member(member_id).await
    }

    /// Soft-deletes an active member.
    ///
    /// The member stays retrievable by ID and its member code becomes available to new
    /// active members of the scope.
    ///
    /// # Returns
    /// - `Ok(MemberDto)` - The member in its deleted state
    /// - `Err(Error::MemberError(MemberError::NotFound))` - Absent or already deleted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn soft_delete(&self, member_id: i32) -> Result<MemberDto, Error> {
        let member_repo = MemberRepository::new(self.db);
        let current = self.get_active_model(member_id).await?;

        let key = MemberFields::from(&current).natural_key();
        let rows_affected = member_repo
            .soft_delete(member_id, Utc::now().naive_utc())
            .await
            .map_err(|err| storage_error(err, &key))?;

        if rows_affected == 0 {
            return Err(MemberError::NotFound(member_id).into());
        }

        tracing::info!(
            member_id = %member_id,
            member_code = %current.member_code,
            "Soft-deleted member"
        );

        self.get_written_member(member_id).await
    }

    /// Restores a soft-deleted member.
    ///
    /// If a new active member has claimed the natural key since the deletion, the restore is
    /// rejected and both records are left unchanged.
    ///
    /// # Returns
    /// - `Ok(MemberDto)` - The member in its active state
    /// - `Err(Error::MemberError(MemberError::NotFound))` - Absent or not deleted
    /// - `Err(Error::MemberError(MemberError::ConstraintViolation))` - Natural key reclaimed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn restore(&self, member_id: i32) -> Result<MemberDto, Error> {
        let member_repo = MemberRepository::new(self.db);
        let current = match member_repo.get_by_id(member_id).await? {
            Some(member) if member.deleted_at.is_some() => member,
            _ => return Err(MemberError::NotFound(member_id).into()),
        };

        let key = MemberFields::from(&current).natural_key();
        let rows_affected = member_repo
            .restore(member_id)
            .await
            .map_err(|err| storage_error(err, &key))?;

        if rows_affected == 0 {
            return Err(MemberError::NotFound(member_id).into());
        }

        tracing::info!(
            member_id = %member_id,
            member_code = %current.member_code,
            "Restored member"
        );

        self.get_written_member(member_id).await
    }

    /// Lists the members of one scope ordered by member code.
    ///
    /// An `affiliation_id` of `None` selects members without an affiliation.
    pub async fn list(&self, query: MemberQuery) -> Result<Vec<MemberDto>, Error> {
        let member_repo = MemberRepository::new(self.db);

        Ok(member_repo
            .list(
                query.organization_type,
                query.affiliation_id,
                query.include_deleted,
            )
            .await?
            .into_iter()
            .map(MemberDto::from)
            .collect())
    }

    async fn get_active_model(&self, member_id: i32) -> Result<MemberModel, Error> {
        let member_repo = MemberRepository::new(self.db);

        match member_repo.get_by_id(member_id).await? {
            Some(member) if member.deleted_at.is_none() => Ok(member),
            _ => Err(MemberError::NotFound(member_id).into()),
        }
    }

    async fn get_written_member(&self, member_id: i32) -> Result<MemberDto, Error> {
        let member_repo = MemberRepository::new(self.db);

        member_repo
            .get_by_id(member_id)
            .await?
            .map(MemberDto::from)
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Member ID {} disappeared right after being written",
                    member_id
                ))
            })
    }

    async fn ensure_affiliation_exists(&self, affiliation_id: Option<i32>) -> Result<(), Error> {
        let Some(affiliation_id) = affiliation_id else {
            return Ok(());
        };

        let affiliation_repo = AffiliationRepository::new(self.db);
        if affiliation_repo.get_by_id(affiliation_id).await?.is_none() {
            return Err(MemberError::Validation(format!(
                "affiliation ID {} does not exist",
                affiliation_id
            ))
            .into());
        }

        Ok(())
    }
}
