//! Declarative test builder for phase 1 setup.
//!
//! All configuration is queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::OrganizationType;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    run_migrations: bool,
    file_database: Option<u32>,
    affiliations: Vec<String>,
    members: Vec<(OrganizationType, Option<String>, String)>, // (organization_type, affiliation name, member_code)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no schema and no fixtures.
    pub fn new() -> Self {
        Self {
            run_migrations: false,
            file_database: None,
            affiliations: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Apply all migrations to the test database.
    ///
    /// Without this the database is empty, which is useful for asserting behaviour when
    /// tables are missing.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Back the test with a SQLite file and a pool of `max_connections` connections.
    ///
    /// Needed by tests that issue overlapping statements; the default in-memory database
    /// runs everything on a single connection.
    pub fn with_file_database(mut self, max_connections: u32) -> Self {
        self.file_database = Some(max_connections);
        self
    }

    /// Insert an affiliation with the provided name.
    ///
    /// # Arguments
    /// - `name` - Unique affiliation name
    pub fn with_affiliation(mut self, name: &str) -> Self {
        self.affiliations.push(name.to_string());
        self
    }

    /// Insert an active member.
    ///
    /// The affiliation is referenced by name and created if it was not queued with
    /// `with_affiliation`.
    ///
    /// # Arguments
    /// - `organization_type` - Scope tag of the member
    /// - `affiliation` - Optional affiliation name
    /// - `member_code` - Member code within the scope
    pub fn with_member(
        mut self,
        organization_type: OrganizationType,
        affiliation: Option<&str>,
        member_code: &str,
    ) -> Self {
        self.members.push((
            organization_type,
            affiliation.map(str::to_string),
            member_code.to_string(),
        ));
        self
    }

    /// Build the test context, executing all queued setup.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database created with the requested schema and fixtures
    /// - `Err(TestError::Fixture)` - Fixtures were queued without `with_migrations`
    /// - `Err(TestError::DbErr)` - Schema or fixture creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = match self.file_database {
            Some(max_connections) => TestContext::new_file_backed(max_connections).await?,
            None => TestContext::new().await?,
        };

        if !self.run_migrations {
            if !self.affiliations.is_empty() || !self.members.is_empty() {
                return Err(TestError::Fixture(
                    "fixtures require with_migrations() to be set".to_string(),
                ));
            }

            return Ok(test);
        }

        test.run_migrations().await?;

        for name in &self.affiliations {
            test.affiliation().get_or_insert_affiliation(name).await?;
        }

        for (organization_type, affiliation, member_code) in self.members {
            let affiliation_id = match affiliation {
                Some(name) => Some(
                    test.affiliation()
                        .get_or_insert_affiliation(&name)
                        .await?
                        .id,
                ),
                None => None,
            };

            test.member()
                .insert_member(organization_type, affiliation_id, &member_code)
                .await?;
        }

        Ok(test)
    }
}
