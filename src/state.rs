//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. It replaces any notion of
//! a process-wide database handle: every component that touches the database
//! receives the connection through this state.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types; `DatabaseConnection` is a connection
/// pool, so clones share the underlying pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
