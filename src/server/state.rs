//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Days between fitness checkups, used wherever a next checkup date is derived.
    pub checkup_interval_days: i64,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `checkup_interval_days` - Configured checkup cadence
    pub fn new(db: DatabaseConnection, checkup_interval_days: i64) -> Self {
        Self {
            db,
            checkup_interval_days,
        }
    }
}
