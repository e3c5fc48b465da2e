use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::affiliation::{AffiliationDto, CreateAffiliationDto},
    server::{
        data::affiliation::AffiliationRepository,
        error::{affiliation::AffiliationError, Error},
        model::db::AffiliationModel,
    },
};

const MAX_NAME_LEN: usize = 255;

impl From<AffiliationModel> for AffiliationDto {
    fn from(model: AffiliationModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Service for managing affiliations, the institutions owning member records.
pub struct AffiliationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AffiliationService<'a> {
    /// Creates a new instance of [`AffiliationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an affiliation
    ///
    /// # Returns
    /// - `Ok(AffiliationDto)` - The created affiliation
    /// - `Err(Error::AffiliationError(AffiliationError::Validation))` - Blank or overlong name
    /// - `Err(Error::AffiliationError(AffiliationError::DuplicateName))` - Name already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, affiliation: CreateAffiliationDto) -> Result<AffiliationDto, Error> {
        let name = affiliation.name.trim().to_string();

        if name.is_empty() {
            return Err(AffiliationError::Validation("name must not be blank".to_string()).into());
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AffiliationError::Validation(format!(
                "name must be at most {} characters",
                MAX_NAME_LEN
            ))
            .into());
        }

        let affiliation_repo = AffiliationRepository::new(self.db);
        let affiliation = match affiliation_repo.create(name.clone()).await {
            Ok(affiliation) => affiliation,
            Err(err) => {
                return Err(match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        AffiliationError::DuplicateName(name).into()
                    }
                    _ => err.into(),
                })
            }
        };

        tracing::info!(
            affiliation_id = %affiliation.id,
            name = %affiliation.name,
            "Created affiliation"
        );

        Ok(affiliation.into())
    }

    /// Retrieves an affiliation by ID
    ///
    /// # Returns
    /// - `Ok(AffiliationDto)` - The affiliation
    /// - `Err(Error::AffiliationError(AffiliationError::NotFound))` - No affiliation with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, affiliation_id: i32) -> Result<AffiliationDto, Error> {
        let affiliation_repo = AffiliationRepository::new(self.db);

        affiliation_repo
            .get_by_id(affiliation_id)
            .await?
            .map(AffiliationDto::from)
            .ok_or_else(|| AffiliationError::NotFound(affiliation_id).into())
    }

    /// Lists all affiliations ordered by name
    pub async fn list(&self) -> Result<Vec<AffiliationDto>, Error> {
        let affiliation_repo = AffiliationRepository::new(self.db);

        Ok(affiliation_repo
            .list()
            .await?
            .into_iter()
            .map(AffiliationDto::from)
            .collect())
    }
}
