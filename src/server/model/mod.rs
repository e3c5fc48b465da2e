//! Server application models and type definitions.
//!
//! Contains the application state shared by HTTP handlers and type aliases for the database
//! models produced by the `entity` crate.

/// Application state shared by handlers.
pub mod app;
/// Aliases for the `entity` crate models.
pub mod db;
