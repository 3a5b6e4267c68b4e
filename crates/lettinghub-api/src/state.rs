//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use lettinghub_core::config::AppConfig;
use lettinghub_database::repositories::property::PropertyRepository;
use lettinghub_service::property::PropertyService;

use crate::auth::decoder::JwtDecoder;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Property repository.
    pub property_repo: Arc<PropertyRepository>,
    /// Property service.
    pub property_service: Arc<PropertyService>,
}
