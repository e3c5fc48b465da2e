//! SeaORM entity definitions for the roster database schema.

pub mod prelude;

pub mod affiliation;
pub mod member;
pub mod sea_orm_active_enums;
