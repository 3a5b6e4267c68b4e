//! Property CRUD and search operations.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use lettinghub_core::error::AppError;
use lettinghub_core::result::AppResult;
use lettinghub_database::repositories::property::PropertyRepository;
use lettinghub_entity::property::{CreateProperty, HouseType, LocationType, Property};

/// Manages property listings.
#[derive(Debug, Clone)]
pub struct PropertyService {
    /// Property repository.
    repo: Arc<PropertyRepository>,
}

/// Result of a property write or detail read.
///
/// Mutation responses only echo the id and message; detail reads carry
/// the headline fields and image references as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    /// The affected property's id.
    pub property_id: i64,
    /// Human-readable outcome message.
    pub message: String,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Listing title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Listing description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Monthly rent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_amount: Option<Decimal>,
    /// Primary image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Second image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
    /// Third image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image3: Option<String>,
    /// Fourth image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image4: Option<String>,
}

impl PropertyResponse {
    /// Response for a mutation that only echoes the id.
    fn acknowledged(property_id: i64, message: &str) -> Self {
        Self {
            property_id,
            message: message.to_string(),
            success: true,
            title: None,
            description: None,
            rent_amount: None,
            image: None,
            image2: None,
            image3: None,
            image4: None,
        }
    }

    /// Response carrying the listing's headline fields.
    fn detailed(property: &Property, message: &str) -> Self {
        Self {
            property_id: property.id,
            message: message.to_string(),
            success: true,
            title: Some(property.title.clone()),
            description: Some(property.description.clone()),
            rent_amount: Some(property.rent_amount),
            image: Some(property.image.clone()),
            image2: Some(property.image2.clone()),
            image3: Some(property.image3.clone()),
            image4: Some(property.image4.clone()),
        }
    }
}

/// Full listing view returned by list and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    /// Listing id.
    pub id: i64,
    /// Listing title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Monthly rent.
    pub rent_amount: Decimal,
    /// Security deposit.
    pub security_deposit: Decimal,
    /// Street address.
    pub street_address: String,
    /// Rental condition text.
    pub rental_condition: String,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub location_type: LocationType,
    /// Dwelling classification.
    pub house_type: HouseType,
    /// Units available.
    pub quantity: i32,
    /// Availability date.
    pub available_date: String,
    /// Number of bedrooms.
    pub bedrooms: i32,
    /// Interior description.
    pub interior: String,
    /// Surface area text.
    pub surface_area: String,
    /// Whether the listing is currently rented out.
    pub is_rented: bool,
    /// Primary image reference.
    pub image: String,
    /// Second image reference.
    pub image2: String,
    /// Third image reference.
    pub image3: String,
    /// Fourth image reference.
    pub image4: String,
}

impl From<Property> for PropertySummary {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            title: property.title,
            description: property.description,
            rent_amount: property.rent_amount,
            security_deposit: property.security_deposit,
            street_address: property.street_address,
            rental_condition: property.rental_condition,
            postal_code: property.postal_code,
            location_type: property.location_type,
            house_type: property.house_type,
            quantity: property.quantity,
            available_date: property.available_date,
            bedrooms: property.bedrooms,
            interior: property.interior,
            surface_area: property.surface_area,
            is_rented: property.is_rented,
            image: property.image,
            image2: property.image2,
            image3: property.image3,
            image4: property.image4,
        }
    }
}

impl PropertyService {
    /// Creates a new property service.
    pub fn new(repo: Arc<PropertyRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new listing.
    ///
    /// Runs the ordered uniqueness pre-check (title, postal code, address,
    /// interior, surface area) so the first colliding field in that order
    /// is the one reported; the database's unique indexes remain the
    /// race-free guard behind it.
    pub async fn create_property(&self, data: CreateProperty) -> AppResult<PropertyResponse> {
        info!(title = %data.title, "Creating new property");

        self.ensure_unique(&data).await?;

        let property = self.repo.create(&data).await?;

        info!(property_id = property.id, "Property created");
        Ok(PropertyResponse::detailed(
            &property,
            "Property created successfully",
        ))
    }

    /// Fully replaces an existing listing's fields.
    ///
    /// No uniqueness pre-check is run here; only the database indexes
    /// guard against collisions on update.
    pub async fn update_property(
        &self,
        data: CreateProperty,
        id: i64,
    ) -> AppResult<PropertyResponse> {
        info!(property_id = id, "Updating property");

        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::not_found(format!(
                "Property not found with ID: {id}"
            )));
        }

        self.repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Property not found with ID: {id}")))?;

        info!(property_id = id, "Property updated");
        Ok(PropertyResponse::acknowledged(
            id,
            "Property updated successfully",
        ))
    }

    /// Updates only the rented flag of a listing.
    pub async fn update_property_status(
        &self,
        id: i64,
        is_rented: bool,
    ) -> AppResult<PropertyResponse> {
        info!(property_id = id, is_rented, "Updating property rented status");

        self.repo
            .set_rented(id, is_rented)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Property not found with ID: {id}")))?;

        Ok(PropertyResponse::acknowledged(
            id,
            "Property status updated successfully",
        ))
    }

    /// Deletes a listing.
    pub async fn delete_property(&self, id: i64) -> AppResult<PropertyResponse> {
        info!(property_id = id, "Deleting property");

        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::not_found(format!(
                "Property not found with ID: {id}"
            )));
        }

        self.repo.delete(id).await?;

        info!(property_id = id, "Property deleted");
        Ok(PropertyResponse::acknowledged(
            id,
            "Property deleted successfully",
        ))
    }

    /// Fetches a listing's detail view by id.
    pub async fn get_property_by_id(&self, id: i64) -> AppResult<PropertyResponse> {
        info!(property_id = id, "Fetching property");

        let property = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Property not found with ID: {id}")))?;

        Ok(PropertyResponse::detailed(
            &property,
            "Property retrieved successfully",
        ))
    }

    /// Searches listings by city name, ignoring case.
    ///
    /// An unrecognized city is treated as "no match", not an error.
    pub async fn search_by_location(&self, location: &str) -> AppResult<Vec<PropertySummary>> {
        info!(location, "Searching properties by location");

        let Ok(location_type) = location.parse::<LocationType>() else {
            warn!(location, "Invalid location type");
            return Ok(Vec::new());
        };

        let properties = self.repo.find_by_location(location_type).await?;
        Ok(properties.into_iter().map(Into::into).collect())
    }

    /// Searches listings by house type.
    ///
    /// The match is case-sensitive to the enum spelling; anything else is
    /// treated as "no match", not an error.
    pub async fn search_by_house_type(&self, house_type: &str) -> AppResult<Vec<PropertySummary>> {
        info!(house_type, "Searching properties by house type");

        let Ok(parsed) = house_type.parse::<HouseType>() else {
            warn!(house_type, "Invalid house type");
            return Ok(Vec::new());
        };

        let properties = self.repo.find_by_house_type(parsed).await?;
        Ok(properties.into_iter().map(Into::into).collect())
    }

    /// Searches listings whose surface area contains the given substring.
    pub async fn search_by_surface_area(
        &self,
        surface_area: &str,
    ) -> AppResult<Vec<PropertySummary>> {
        info!(surface_area, "Searching properties by surface area");

        let properties = self
            .repo
            .find_by_surface_area_containing(surface_area)
            .await?;
        Ok(properties.into_iter().map(Into::into).collect())
    }

    /// Searches listings whose interior description contains the given
    /// substring.
    pub async fn search_by_interior(&self, interior: &str) -> AppResult<Vec<PropertySummary>> {
        info!(interior, "Searching properties by interior");

        let properties = self.repo.find_by_interior_containing(interior).await?;
        Ok(properties.into_iter().map(Into::into).collect())
    }

    /// Searches listings with rent at or below the given amount.
    pub async fn search_by_max_rent(
        &self,
        rent_amount: Decimal,
    ) -> AppResult<Vec<PropertySummary>> {
        info!(%rent_amount, "Searching properties by max rent");

        let properties = self.repo.find_by_rent_at_most(rent_amount).await?;
        Ok(properties.into_iter().map(Into::into).collect())
    }

    /// Lists all listings.
    pub async fn list_all(&self) -> AppResult<Vec<PropertySummary>> {
        info!("Fetching all properties");

        let properties = self.repo.find_all().await?;
        Ok(properties.into_iter().map(Into::into).collect())
    }

    /// Ordered uniqueness pre-check; fails with a Conflict on the first
    /// colliding field.
    async fn ensure_unique(&self, data: &CreateProperty) -> AppResult<()> {
        if self.repo.exists_by_title(&data.title).await? {
            return Err(AppError::conflict(format!(
                "Property already exists with title '{}'",
                data.title
            )));
        }

        if self.repo.exists_by_postal_code(&data.postal_code).await? {
            return Err(AppError::conflict(format!(
                "Property already exists with postal code '{}'",
                data.postal_code
            )));
        }

        if self
            .repo
            .exists_by_street_address(&data.street_address)
            .await?
        {
            return Err(AppError::conflict(format!(
                "Property already exists with address '{}'",
                data.street_address
            )));
        }

        if self.repo.exists_by_interior(&data.interior).await? {
            return Err(AppError::conflict(format!(
                "Property already exists with interior '{}'",
                data.interior
            )));
        }

        if self.repo.exists_by_surface_area(&data.surface_area).await? {
            return Err(AppError::conflict(format!(
                "Property already exists with surface area '{}'",
                data.surface_area
            )));
        }

        Ok(())
    }
}
