use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository for the affiliation table.
pub struct AffiliationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AffiliationRepository<'a, C> {
    /// Creates a new instance of [`AffiliationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new affiliation
    pub async fn create(&self, name: String) -> Result<entity::affiliation::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let affiliation = entity::affiliation::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        affiliation.insert(self.db).await
    }

    /// Gets an affiliation by ID
    pub async fn get_by_id(
        &self,
        affiliation_id: i32,
    ) -> Result<Option<entity::affiliation::Model>, DbErr> {
        entity::prelude::Affiliation::find_by_id(affiliation_id)
            .one(self.db)
            .await
    }

    /// Lists all affiliations ordered by name
    pub async fn list(&self) -> Result<Vec<entity::affiliation::Model>, DbErr> {
        entity::prelude::Affiliation::find()
            .order_by_asc(entity::affiliation::Column::Name)
            .all(self.db)
            .await
    }
}
