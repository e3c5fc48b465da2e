//! Member registry with affiliation-scoped, soft-delete-aware member codes.

pub mod model;
pub mod server;
