//! Service layer for business logic.
//!
//! Services validate input, call the repositories in [`crate::server::data`], and translate
//! storage failures into the domain errors of [`crate::server::error`].

/// Affiliation management.
pub mod affiliation;
/// Member record lifecycle.
pub mod member;
