use sea_orm_migration::{prelude::*, schema::*, sea_orm::DbBackend};

use crate::m20250301_000001_affiliation::Affiliation;

/// Name of the unique index guarding member codes among active members of a scope.
pub static UQ_MEMBER_SCOPE_CODE_EPOCH: &str = "uq-member-scope-code-epoch";
static IDX_MEMBER_ORGANIZATION_AFFILIATION: &str = "idx-member-organization_type-affiliation_id";
static FK_MEMBER_AFFILIATION_ID: &str = "fk-member-affiliation_id";

// NULLs never collide inside a unique index, so the index is built over a non-null copy of
// the affiliation reference.
const AFFILIATION_SCOPE_EXPR: &str = "GENERATED ALWAYS AS (COALESCE(affiliation_id, 0)) STORED";

/// Returns the generated column clause for `deletion_epoch` on the given backend.
///
/// The value is `'0'` while the row is active and a string derived from `deleted_at` once the
/// row has been soft-deleted. PostgreSQL only accepts immutable expressions in generated
/// columns, which `timestamp::text` is not, so the epoch seconds are used there instead.
fn deletion_epoch_expr(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Postgres => {
            "GENERATED ALWAYS AS (CASE WHEN deleted_at IS NULL THEN '0' \
             ELSE (EXTRACT(EPOCH FROM deleted_at))::text END) STORED"
        }
        DbBackend::MySql => {
            "GENERATED ALWAYS AS (IF(deleted_at IS NULL, '0', CAST(deleted_at AS CHAR))) STORED"
        }
        _ => {
            "GENERATED ALWAYS AS (CASE WHEN deleted_at IS NULL THEN '0' \
             ELSE CAST(deleted_at AS TEXT) END) STORED"
        }
    }
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string_len(Member::OrganizationType, 32))
                    .col(integer_null(Member::AffiliationId))
                    .col(integer(Member::AffiliationScope).extra(AFFILIATION_SCOPE_EXPR))
                    .col(string_len(Member::MemberCode, 64))
                    .col(string(Member::Name))
                    .col(string_null(Member::Position))
                    .col(date_null(Member::EntryDate))
                    .col(date_null(Member::GraduatedAt))
                    .col(date_null(Member::LeaveAt))
                    .col(date_null(Member::ActiveAgainAt))
                    .col(string_len(Member::Status, 16).default("active"))
                    .col(timestamp(Member::CreatedAt))
                    .col(timestamp(Member::UpdatedAt))
                    .col(timestamp_null(Member::DeletedAt))
                    .col(string(Member::DeletionEpoch).extra(deletion_epoch_expr(backend)))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MEMBER_AFFILIATION_ID)
                            .from(Member::Table, Member::AffiliationId)
                            .to(Affiliation::Table, Affiliation::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEMBER_ORGANIZATION_AFFILIATION)
                    .table(Member::Table)
                    .col(Member::OrganizationType)
                    .col(Member::AffiliationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_MEMBER_SCOPE_CODE_EPOCH)
                    .table(Member::Table)
                    .col(Member::OrganizationType)
                    .col(Member::AffiliationScope)
                    .col(Member::MemberCode)
                    .col(Member::DeletionEpoch)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UQ_MEMBER_SCOPE_CODE_EPOCH)
                    .table(Member::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEMBER_ORGANIZATION_AFFILIATION)
                    .table(Member::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    OrganizationType,
    AffiliationId,
    AffiliationScope,
    MemberCode,
    Name,
    Position,
    EntryDate,
    GraduatedAt,
    LeaveAt,
    ActiveAgainAt,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    DeletionEpoch,
}
