//! Fixture utilities for inserting records during test execution (phase 2).
//!
//! - `affiliation` - Affiliation records
//! - `member` - Member records, active or soft-deleted
//! - `factory` - Pure functions producing in-memory models

pub mod affiliation;
pub mod factory;
pub mod member;
