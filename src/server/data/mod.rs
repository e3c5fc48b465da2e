//! Data access layer repositories.
//!
//! Repositories issue single statements against the database and return raw
//! [`sea_orm::DbErr`] results; translating those into domain errors is left to the services.

/// Affiliation persistence.
pub mod affiliation;
/// Member persistence scoped by organization type and affiliation.
pub mod member;
