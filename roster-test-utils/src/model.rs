//! Database model aliases used by fixtures.

pub type AffiliationModel = entity::affiliation::Model;
pub type MemberModel = entity::member::Model;
