//! Factories for creating test entities with sensible defaults.
//!
//! Each factory inserts an entity with default values that can be overridden
//! through a builder pattern, reducing boilerplate in repository and service
//! tests.

pub mod account;
pub mod helpers;
pub mod save;
