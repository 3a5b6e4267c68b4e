//! Property entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::house_type::HouseType;
use super::location::LocationType;

/// A rental listing stored in the `properties` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    /// Unique listing identifier, assigned by the database on insert.
    pub id: i64,
    /// Listing title, unique across all properties.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Rental condition text (deposit terms, minimum stay, etc.).
    pub rental_condition: String,
    /// Interior description, unique across all properties.
    pub interior: String,
    /// Surface area as free text (e.g. "80 m²"), unique across all properties.
    pub surface_area: String,
    /// Dutch postal code (4 digits + 2 uppercase letters), unique.
    pub postal_code: String,
    /// Street address, unique across all properties.
    pub street_address: String,
    /// Availability date as free text.
    pub available_date: String,
    /// City the listing is located in.
    pub location_type: LocationType,
    /// Dwelling classification.
    pub house_type: HouseType,
    /// Monthly rent in euros.
    pub rent_amount: Decimal,
    /// Security deposit in euros.
    pub security_deposit: Decimal,
    /// Number of units available.
    pub quantity: i32,
    /// Number of bedrooms.
    pub bedrooms: i32,
    /// Primary image reference.
    pub image: String,
    /// Second image reference.
    pub image2: String,
    /// Third image reference.
    pub image3: String,
    /// Fourth image reference.
    pub image4: String,
    /// Whether the listing is currently rented out.
    pub is_rented: bool,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new property, and the full field set written
/// by a full update. The rented flag is managed separately and never part
/// of this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProperty {
    /// Listing title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Rental condition text.
    pub rental_condition: String,
    /// Interior description.
    pub interior: String,
    /// Surface area as free text.
    pub surface_area: String,
    /// Dutch postal code.
    pub postal_code: String,
    /// Street address.
    pub street_address: String,
    /// Availability date as free text.
    pub available_date: String,
    /// City the listing is located in.
    pub location_type: LocationType,
    /// Dwelling classification.
    pub house_type: HouseType,
    /// Monthly rent in euros.
    pub rent_amount: Decimal,
    /// Security deposit in euros.
    pub security_deposit: Decimal,
    /// Number of units available.
    pub quantity: i32,
    /// Number of bedrooms.
    pub bedrooms: i32,
    /// Primary image reference.
    pub image: String,
    /// Second image reference.
    pub image2: String,
    /// Third image reference.
    pub image3: String,
    /// Fourth image reference.
    pub image4: String,
}

impl Property {
    /// Whether at least one unit of this listing is still available.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}
