//! Public search handlers.
//!
//! Location, house type, surface area, interior, and rent ceiling hit
//! dedicated store queries; bedrooms, price range, and advanced search
//! filter the full listing set in memory.

use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::info;

use lettinghub_service::property::PropertySummary;
use lettinghub_service::property::search::{self, AdvancedSearchCriteria};

use crate::dto::request::{
    BedroomsQuery, HouseTypeSearchRequest, InteriorQuery, LocationSearchRequest, PriceRangeQuery,
    RentAmountQuery, SurfaceAreaQuery,
};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/properties/search/location/{location}
pub async fn search_by_location_path(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(location, "REST request to search properties by location path");

    let properties = state.property_service.search_by_location(&location).await?;
    Ok(Json(properties))
}

/// POST /api/v1/properties/search/location
pub async fn search_by_location_body(
    State(state): State<AppState>,
    Json(req): Json<LocationSearchRequest>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(location = %req.location_type, "REST request to search properties by location");

    let properties = state
        .property_service
        .search_by_location(&req.location_type)
        .await?;
    Ok(Json(properties))
}

/// GET /api/v1/properties/search/house-type/{houseType}
pub async fn search_by_house_type_path(
    State(state): State<AppState>,
    Path(house_type): Path<String>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(house_type, "REST request to search properties by house type via path");

    let properties = state
        .property_service
        .search_by_house_type(&house_type)
        .await?;
    Ok(Json(properties))
}

/// POST /api/v1/properties/search/house-type
pub async fn search_by_house_type_body(
    State(state): State<AppState>,
    Json(req): Json<HouseTypeSearchRequest>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(house_type = %req.property_type, "REST request to search properties by house type");

    let properties = state
        .property_service
        .search_by_house_type(&req.property_type)
        .await?;
    Ok(Json(properties))
}

/// GET /api/v1/properties/search/surface-area?surfaceArea=
pub async fn search_by_surface_area(
    State(state): State<AppState>,
    Query(query): Query<SurfaceAreaQuery>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(surface_area = %query.surface_area, "REST request to search properties by surface area");

    let properties = state
        .property_service
        .search_by_surface_area(&query.surface_area)
        .await?;
    Ok(Json(properties))
}

/// GET /api/v1/properties/search/interior?interior=
pub async fn search_by_interior(
    State(state): State<AppState>,
    Query(query): Query<InteriorQuery>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(interior = %query.interior, "REST request to search properties by interior");

    let properties = state
        .property_service
        .search_by_interior(&query.interior)
        .await?;
    Ok(Json(properties))
}

/// GET /api/v1/properties/search/rent-amount?maxRentAmount=
pub async fn search_by_rent_amount(
    State(state): State<AppState>,
    Query(query): Query<RentAmountQuery>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(max_rent = %query.max_rent_amount, "REST request to search properties by max rent amount");

    let properties = state
        .property_service
        .search_by_max_rent(query.max_rent_amount)
        .await?;
    Ok(Json(properties))
}

/// GET /api/v1/properties/search/bedrooms?bedrooms=
pub async fn search_by_bedrooms(
    State(state): State<AppState>,
    Query(query): Query<BedroomsQuery>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(bedrooms = query.bedrooms, "REST request to search properties by bedroom count");

    let properties = state.property_service.list_all().await?;
    Ok(Json(search::with_bedrooms(properties, query.bedrooms)))
}

/// GET /api/v1/properties/search/price-range?minPrice=&maxPrice=
pub async fn search_by_price_range(
    State(state): State<AppState>,
    Query(query): Query<PriceRangeQuery>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!(
        min_price = %query.min_price,
        max_price = %query.max_price,
        "REST request to search properties by price range"
    );

    let properties = state.property_service.list_all().await?;
    Ok(Json(search::in_price_range(
        properties,
        query.min_price,
        query.max_price,
    )))
}

/// GET /api/v1/properties/search/advanced
pub async fn search_advanced(
    State(state): State<AppState>,
    Query(criteria): Query<AdvancedSearchCriteria>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!("REST request for advanced property search with multiple criteria");

    let properties = state.property_service.list_all().await?;
    Ok(Json(search::advanced(properties, &criteria)))
}
