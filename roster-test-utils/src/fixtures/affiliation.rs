//! Affiliation fixture helpers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, model::AffiliationModel, TestContext};

pub struct AffiliationFixtures<'a> {
    test: &'a TestContext,
}

impl TestContext {
    /// Access affiliation fixture helpers.
    pub fn affiliation(&self) -> AffiliationFixtures<'_> {
        AffiliationFixtures { test: self }
    }
}

impl<'a> AffiliationFixtures<'a> {
    /// Insert an affiliation with the provided name.
    ///
    /// # Returns
    /// - `Ok(AffiliationModel)` - The created affiliation
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. duplicate name
    pub async fn insert_affiliation(&self, name: &str) -> Result<AffiliationModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::affiliation::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.test.db)
        .await?)
    }

    /// Return the affiliation with the provided name, inserting it if missing.
    pub async fn get_or_insert_affiliation(
        &self,
        name: &str,
    ) -> Result<AffiliationModel, TestError> {
        let existing = entity::prelude::Affiliation::find()
            .filter(entity::affiliation::Column::Name.eq(name))
            .one(&self.test.db)
            .await?;

        match existing {
            Some(affiliation) => Ok(affiliation),
            None => self.insert_affiliation(name).await,
        }
    }
}
