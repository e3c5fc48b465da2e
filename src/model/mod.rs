//! Data transfer objects shared by the HTTP API and its consumers.

pub mod affiliation;
pub mod api;
pub mod member;
