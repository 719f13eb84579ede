//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, util::jwt::JwtKeys};

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and `JwtKeys` holds only the derived key bytes.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Keys for issuing and verifying bearer tokens.
    pub jwt: JwtKeys,
}

impl AppState {
    /// Creates a new AppState instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool, already migrated
    /// - `config` - Configuration supplying the token secret and lifetime
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            jwt: JwtKeys::new(&config.jwt_secret_key, config.jwt_expires_in_seconds),
        }
    }
}
