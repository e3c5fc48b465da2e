pub use super::affiliation::Entity as Affiliation;
pub use super::member::Entity as Member;
