//! Route definitions for the LettingHub HTTP API.
//!
//! All routes are mounted under `/api/v1`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v1/properties", property_routes())
        .route("/api/v1/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Property CRUD and search endpoints.
///
/// Writes are gated to Admin / PropertyManager inside the handlers;
/// reads and searches are public.
fn property_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::property::create_property).get(handlers::property::list_all_properties),
        )
        .route(
            "/{id}",
            get(handlers::property::get_property_by_id)
                .put(handlers::property::update_property)
                .delete(handlers::property::delete_property),
        )
        .route(
            "/property/{id}",
            put(handlers::property::update_property_status),
        )
        .route(
            "/available",
            get(handlers::property::list_available_properties),
        )
        .route(
            "/search/location",
            post(handlers::search::search_by_location_body),
        )
        .route(
            "/search/location/{location}",
            get(handlers::search::search_by_location_path),
        )
        .route(
            "/search/house-type",
            post(handlers::search::search_by_house_type_body),
        )
        .route(
            "/search/house-type/{houseType}",
            get(handlers::search::search_by_house_type_path),
        )
        .route(
            "/search/surface-area",
            get(handlers::search::search_by_surface_area),
        )
        .route("/search/interior", get(handlers::search::search_by_interior))
        .route(
            "/search/rent-amount",
            get(handlers::search::search_by_rent_amount),
        )
        .route("/search/bedrooms", get(handlers::search::search_by_bedrooms))
        .route(
            "/search/price-range",
            get(handlers::search::search_by_price_range),
        )
        .route("/search/advanced", get(handlers::search::search_advanced))
}
