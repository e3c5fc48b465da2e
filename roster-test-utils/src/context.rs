//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment for phase 2 of a test.
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_migrations().build().await?;
///
/// let repo = MemberRepository::new(&test.db);
/// test.affiliation().insert_affiliation("City Hospital").await?;
/// ```
pub struct TestContext {
    /// Database connection to the test SQLite database
    pub db: DatabaseConnection,
    file: Option<PathBuf>,
}

static FILE_DATABASE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl TestContext {
    /// Create a new test context backed by an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables created
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, file: None })
    }

    /// Create a new test context backed by an empty SQLite file in the temp directory.
    ///
    /// Unlike the in-memory database, the pool holds up to `max_connections` connections, so
    /// statements issued concurrently really run on separate connections. The file is removed
    /// when the context is dropped.
    pub(crate) async fn new_file_backed(max_connections: u32) -> Result<Self, TestError> {
        let path = std::env::temp_dir().join(format!(
            "roster-test-{}-{}.db",
            std::process::id(),
            FILE_DATABASE_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
        opt.max_connections(max_connections).sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(TestContext {
            db,
            file: Some(path),
        })
    }

    /// Run every migration against the test database.
    ///
    /// The member table relies on generated columns and a composite unique index which only
    /// the migrations create, so tests touching members need this rather than tables derived
    /// from the entities.
    pub(crate) async fn run_migrations(&self) -> Result<(), TestError> {
        Migrator::up(&self.db, None).await?;

        Ok(())
    }

    /// Convert the database connection into any type that can be constructed from it.
    ///
    /// Avoids a dependency from this crate on the main roster crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(path) = &self.file {
            for suffix in ["", "-wal", "-shm", "-journal"] {
                let mut file = path.clone().into_os_string();
                file.push(suffix);
                let _ = std::fs::remove_file(file);
            }
        }
    }
}
