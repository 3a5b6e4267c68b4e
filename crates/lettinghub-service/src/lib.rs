//! # lettinghub-service
//!
//! Business logic service layer for LettingHub. The property service
//! orchestrates the repository to implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod property;

pub use context::RequestContext;
pub use property::{PropertyResponse, PropertyService, PropertySummary};
