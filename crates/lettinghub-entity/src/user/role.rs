//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles asserted by the user service's JWT tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full system administrator.
    Admin,
    /// Can create, update, and delete listings.
    PropertyManager,
    /// Read-only access to listings.
    Tenant,
}

impl UserRole {
    /// Check if this role may manage listings (create/update/delete).
    pub fn can_manage_properties(&self) -> bool {
        matches!(self, Self::Admin | Self::PropertyManager)
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as its canonical claim string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::PropertyManager => "PROPERTY_MANAGER",
            Self::Tenant => "TENANT",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = lettinghub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "PROPERTY_MANAGER" => Ok(Self::PropertyManager),
            "TENANT" => Ok(Self::Tenant),
            _ => Err(lettinghub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: ADMIN, PROPERTY_MANAGER, TENANT"
            ))),
        }
    }
}
