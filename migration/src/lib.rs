pub use sea_orm_migration::prelude::*;

mod m20250301_000001_affiliation;
mod m20250301_000002_member;

pub use m20250301_000002_member::UQ_MEMBER_SCOPE_CODE_EPOCH;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_affiliation::Migration),
            Box::new(m20250301_000002_member::Migration),
        ]
    }
}
