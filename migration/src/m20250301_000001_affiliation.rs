use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Affiliation::Table)
                    .if_not_exists()
                    .col(pk_auto(Affiliation::Id))
                    .col(string_uniq(Affiliation::Name))
                    .col(timestamp(Affiliation::CreatedAt))
                    .col(timestamp(Affiliation::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Affiliation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Affiliation {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
