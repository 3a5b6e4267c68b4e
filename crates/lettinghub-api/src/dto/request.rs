//! Request DTOs with validation.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use lettinghub_entity::property::{CreateProperty, HouseType, LocationType};

/// Create / full-update request body for a property listing.
///
/// Field names mirror the public API contract (camelCase); enum fields are
/// deserialized straight into their domain types, so an unknown city or
/// house type is rejected before reaching the service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    /// Listing title.
    #[validate(length(
        min = 5,
        max = 200,
        message = "Title must be between 5 and 200 characters"
    ))]
    pub title: String,
    /// Free-text description.
    #[validate(length(min = 1, max = 2000, message = "Description cannot exceed 2000 characters"))]
    pub description: String,
    /// Dwelling classification.
    pub property_type: HouseType,
    /// Number of units available.
    pub quantity: i32,
    /// City the listing is located in.
    pub location_type: LocationType,
    /// Monthly rent in euros.
    #[validate(custom(function = validate_rent_amount))]
    pub rent_amount: Decimal,
    /// Security deposit in euros.
    #[validate(custom(function = validate_security_deposit))]
    pub security_deposit: Decimal,
    /// Street address.
    #[validate(length(min = 1, message = "Street address is required"))]
    pub street_address: String,
    /// Rental condition text.
    #[validate(length(min = 1, message = "Rental condition is required"))]
    pub rental_condition: String,
    /// Surface area as free text.
    #[validate(length(min = 1, message = "Surface area is required"))]
    pub surface_area: String,
    /// Dutch postal code (4 digits + 2 uppercase letters).
    #[validate(custom(function = validate_postal_code))]
    pub postal_code: String,
    /// Interior description.
    #[validate(length(min = 1, message = "Interior is required"))]
    pub interior: String,
    /// Availability date as free text.
    #[validate(length(min = 1, message = "Available date is required"))]
    pub available_date: String,
    /// Number of bedrooms.
    #[validate(range(min = 1, max = 10, message = "Number of bedrooms must be between 1 and 10"))]
    pub bedrooms: i32,
    /// Primary image reference.
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
    /// Second image reference.
    #[validate(length(min = 1, message = "Image2 is required"))]
    pub image2: String,
    /// Third image reference.
    #[validate(length(min = 1, message = "Image3 is required"))]
    pub image3: String,
    /// Fourth image reference.
    #[validate(length(min = 1, message = "Image4 is required"))]
    pub image4: String,
}

impl CreatePropertyRequest {
    /// Maps the validated request onto the store's write model.
    pub fn into_record(self) -> CreateProperty {
        CreateProperty {
            title: self.title,
            description: self.description,
            rental_condition: self.rental_condition,
            interior: self.interior,
            surface_area: self.surface_area,
            postal_code: self.postal_code,
            street_address: self.street_address,
            available_date: self.available_date,
            location_type: self.location_type,
            house_type: self.property_type,
            rent_amount: self.rent_amount,
            security_deposit: self.security_deposit,
            quantity: self.quantity,
            bedrooms: self.bedrooms,
            image: self.image,
            image2: self.image2,
            image3: self.image3,
            image4: self.image4,
        }
    }
}

/// Rented-flag update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyStatusRequest {
    /// Whether the listing is now rented out.
    pub property_is_rented: bool,
}

/// Body for `POST /search/location`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSearchRequest {
    /// City name, matched case-insensitively.
    pub location_type: String,
}

/// Body for `POST /search/house-type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseTypeSearchRequest {
    /// House type name, matched case-sensitively.
    pub property_type: String,
}

/// Query parameters for `GET /search/surface-area`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceAreaQuery {
    /// Surface area substring.
    pub surface_area: String,
}

/// Query parameters for `GET /search/interior`.
#[derive(Debug, Clone, Deserialize)]
pub struct InteriorQuery {
    /// Interior substring.
    pub interior: String,
}

/// Query parameters for `GET /search/rent-amount`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentAmountQuery {
    /// Maximum rent (inclusive).
    pub max_rent_amount: Decimal,
}

/// Query parameters for `GET /search/bedrooms`.
#[derive(Debug, Clone, Deserialize)]
pub struct BedroomsQuery {
    /// Exact bedroom count.
    pub bedrooms: i32,
}

/// Query parameters for `GET /search/price-range`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeQuery {
    /// Lower rent bound (inclusive).
    pub min_price: Decimal,
    /// Upper rent bound (inclusive).
    pub max_price: Decimal,
}

fn validate_rent_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::from(100) || *value > Decimal::from(5000) {
        return Err(ValidationError::new("rent_amount")
            .with_message(Cow::Borrowed("Rent must be between €100 and €5000")));
    }
    Ok(())
}

fn validate_security_deposit(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("security_deposit")
            .with_message(Cow::Borrowed("Security deposit cannot be negative")));
    }
    Ok(())
}

fn validate_postal_code(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let valid = bytes.len() == 6
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4..].iter().all(u8::is_ascii_uppercase);

    if !valid {
        return Err(ValidationError::new("postal_code")
            .with_message(Cow::Borrowed("Invalid Dutch postal code format")));
    }
    Ok(())
}
