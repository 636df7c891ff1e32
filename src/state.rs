//! Shared application state for all routes.

use sqlx::MySqlPool;

/// Process-wide state: the connection pool, created at startup and reachable
/// from every handler. Cloning is cheap (the pool is internally reference
/// counted).
#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
}
