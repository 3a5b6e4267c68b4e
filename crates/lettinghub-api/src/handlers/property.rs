//! Property CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;

use lettinghub_service::property::search;
use lettinghub_service::property::{PropertyResponse, PropertySummary};

use crate::dto::request::{CreatePropertyRequest, UpdatePropertyStatusRequest};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::middleware::rbac;
use crate::state::AppState;

/// POST /api/v1/properties
pub async fn create_property(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePropertyRequest>,
) -> Result<Json<PropertyResponse>, ApiError> {
    rbac::require_property_manager(&auth)?;
    info!(title = %req.title, "REST request to create property");

    let response = state
        .property_service
        .create_property(req.into_record())
        .await?;
    Ok(Json(response))
}

/// PUT /api/v1/properties/{id}
pub async fn update_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<CreatePropertyRequest>,
) -> Result<Json<PropertyResponse>, ApiError> {
    rbac::require_property_manager(&auth)?;
    info!(property_id = id, "REST request to update property");

    let response = state
        .property_service
        .update_property(req.into_record(), id)
        .await?;
    Ok(Json(response))
}

/// PUT /api/v1/properties/property/{id}
pub async fn update_property_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdatePropertyStatusRequest>,
) -> Result<Json<PropertyResponse>, ApiError> {
    rbac::require_property_manager(&auth)?;
    info!(
        property_id = id,
        is_rented = req.property_is_rented,
        "REST request to update property rented status"
    );

    let response = state
        .property_service
        .update_property_status(id, req.property_is_rented)
        .await?;
    Ok(Json(response))
}

/// DELETE /api/v1/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<PropertyResponse>, ApiError> {
    rbac::require_property_manager(&auth)?;
    info!(property_id = id, "REST request to delete property");

    let response = state.property_service.delete_property(id).await?;
    Ok(Json(response))
}

/// GET /api/v1/properties/{id}
pub async fn get_property_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PropertyResponse>, ApiError> {
    info!(property_id = id, "REST request to get property");

    let response = state.property_service.get_property_by_id(id).await?;
    Ok(Json(response))
}

/// GET /api/v1/properties
pub async fn list_all_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!("REST request to get all properties");

    let properties = state.property_service.list_all().await?;
    Ok(Json(properties))
}

/// GET /api/v1/properties/available
pub async fn list_available_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    info!("REST request to get available properties only");

    let properties = state.property_service.list_all().await?;
    Ok(Json(search::available(properties)))
}
