// Library exports for the api binary and tests
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

use sqlx::MySqlPool;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
}
