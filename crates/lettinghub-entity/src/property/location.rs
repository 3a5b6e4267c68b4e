//! Location type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cities in which listings can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "location_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum LocationType {
    /// Best.
    Best,
    /// Eindhoven.
    Eindhoven,
    /// Helmond.
    Helmond,
    /// Tilburg.
    Tilburg,
    /// Veldhoven.
    Veldhoven,
}

impl LocationType {
    /// Return the location as its canonical uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Best => "BEST",
            Self::Eindhoven => "EINDHOVEN",
            Self::Helmond => "HELMOND",
            Self::Tilburg => "TILBURG",
            Self::Veldhoven => "VELDHOVEN",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = lettinghub_core::AppError;

    /// Parses a location name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BEST" => Ok(Self::Best),
            "EINDHOVEN" => Ok(Self::Eindhoven),
            "HELMOND" => Ok(Self::Helmond),
            "TILBURG" => Ok(Self::Tilburg),
            "VELDHOVEN" => Ok(Self::Veldhoven),
            _ => Err(lettinghub_core::AppError::validation(format!(
                "Invalid location type: '{s}'"
            ))),
        }
    }
}
