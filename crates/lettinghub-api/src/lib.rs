//! # lettinghub-api
//!
//! HTTP API layer for LettingHub built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, request logging, role
//! guards), extractors, DTOs, and error mapping.

pub mod auth;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
