//! Test utilities for roster.
//!
//! Tests are set up in two phases. Phase 1 declares the environment with [`TestBuilder`]
//! (schema, affiliations, members), phase 2 works against the returned [`TestContext`], which
//! owns an in-memory SQLite database and exposes fixture helpers for inserting more records.
//!
//! ```ignore
//! let test = TestBuilder::new()
//!     .with_migrations()
//!     .with_affiliation("University Hospital")
//!     .build()
//!     .await?;
//!
//! let member = test
//!     .member()
//!     .insert_member(OrganizationType::Resident, None, "R001")
//!     .await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
