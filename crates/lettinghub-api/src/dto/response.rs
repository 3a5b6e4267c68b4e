//! Response DTOs.
//!
//! Property responses and summaries are defined in the service crate;
//! only API-local shapes live here.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database status: `"connected"` or `"unreachable"`.
    pub database: String,
}
