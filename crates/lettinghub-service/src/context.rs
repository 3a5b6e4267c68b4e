//! Request context carrying the authenticated caller's asserted identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lettinghub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token by the API layer and passed to role
/// guards. The role is the one asserted by the user service's token; this
/// service performs no further account lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The username from the token's subject claim.
    pub username: String,
    /// The caller's role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(username: String, role: UserRole) -> Self {
        Self {
            username,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns whether the caller may manage listings.
    pub fn can_manage_properties(&self) -> bool {
        self.role.can_manage_properties()
    }
}
