//! House type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dwelling classification for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "house_type")]
pub enum HouseType {
    /// Self-contained apartment.
    Apartment,
    /// Single-room studio with its own facilities.
    Studio,
    /// Room in a shared house.
    Room,
    /// Free-standing or terraced residential house.
    #[sqlx(rename = "Residential_House")]
    #[serde(rename = "Residential_House")]
    ResidentialHouse,
}

impl HouseType {
    /// Return the house type as its canonical string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Studio => "Studio",
            Self::Room => "Room",
            Self::ResidentialHouse => "Residential_House",
        }
    }
}

impl fmt::Display for HouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HouseType {
    type Err = lettinghub_core::AppError;

    /// Parses a house type name. The match is case-sensitive: search
    /// endpoints treat anything but the exact spelling as "no match".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Apartment" => Ok(Self::Apartment),
            "Studio" => Ok(Self::Studio),
            "Room" => Ok(Self::Room),
            "Residential_House" => Ok(Self::ResidentialHouse),
            _ => Err(lettinghub_core::AppError::validation(format!(
                "Invalid house type: '{s}'"
            ))),
        }
    }
}
