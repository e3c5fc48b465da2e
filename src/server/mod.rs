//! Server application core modules.
//!
//! This module contains the server side of the roster: configuration, database startup and
//! migrations, repositories, services enforcing member uniqueness and soft-delete lifecycle,
//! HTTP controllers, and routing.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Environment configuration.
pub mod config;
/// HTTP handlers.
pub mod controller;
/// Repositories.
pub mod data;
/// Error types and their HTTP responses.
pub mod error;
/// Server-side models and application state.
pub mod model;
/// Route table and OpenAPI document.
pub mod router;
/// Business logic.
pub mod service;
/// Database connection and migrations.
pub mod startup;
