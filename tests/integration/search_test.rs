//! Integration tests for property search endpoints.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, property_body};

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_search_by_location_is_case_insensitive() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await;

    let mut eindhoven = property_body(2);
    eindhoven["locationType"] = json!("EINDHOVEN");
    app.create_property(eindhoven).await;

    for path in [
        "/api/v1/properties/search/location/TILBURG",
        "/api/v1/properties/search/location/tilburg",
    ] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK);
        let listings = response.body.as_array().unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0]["locationType"], json!("TILBURG"));
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_search_by_unknown_location_returns_empty_list() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await;

    let response = app
        .request(
            "GET",
            "/api/v1/properties/search/location/NOT_A_CITY",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_search_by_location_via_post_body() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await;

    let response = app
        .request(
            "POST",
            "/api/v1/properties/search/location",
            Some(json!({ "locationType": "TILBURG" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_search_by_house_type_is_case_sensitive() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await;

    let exact = app
        .request(
            "GET",
            "/api/v1/properties/search/house-type/Apartment",
            None,
            None,
        )
        .await;
    assert_eq!(exact.body.as_array().unwrap().len(), 1);

    let lowercase = app
        .request(
            "GET",
            "/api/v1/properties/search/house-type/apartment",
            None,
            None,
        )
        .await;
    assert_eq!(lowercase.status, StatusCode::OK);
    assert!(lowercase.body.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_search_by_surface_area_substring() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await; // "61 m2"
    app.create_property(property_body(12)).await; // "72 m2"

    let response = app
        .request(
            "GET",
            "/api/v1/properties/search/surface-area?surfaceArea=72",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let listings = response.body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["surfaceArea"], json!("72 m2"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_search_by_max_rent() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await; // 950.00

    let mut pricey = property_body(2);
    pricey["rentAmount"] = json!("2500.00");
    app.create_property(pricey).await;

    let response = app
        .request(
            "GET",
            "/api/v1/properties/search/rent-amount?maxRentAmount=1000",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let listings = response.body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["rentAmount"], json!("950.00"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_available_excludes_sold_out_listings() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await;

    let mut sold_out = property_body(2);
    sold_out["quantity"] = json!(0);
    app.create_property(sold_out).await;

    let response = app
        .request("GET", "/api/v1/properties/available", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let listings = response.body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["title"], json!("Canal-side apartment 1"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_search_by_price_range() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await; // 950.00

    let mut pricey = property_body(2);
    pricey["rentAmount"] = json!("2500.00");
    app.create_property(pricey).await;

    let response = app
        .request(
            "GET",
            "/api/v1/properties/search/price-range?minPrice=2000&maxPrice=3000",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let listings = response.body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["rentAmount"], json!("2500.00"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_advanced_search_combines_criteria() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await;

    let mut studio = property_body(2);
    studio["propertyType"] = json!("Studio");
    studio["locationType"] = json!("EINDHOVEN");
    studio["rentAmount"] = json!("600.00");
    studio["bedrooms"] = json!(1);
    app.create_property(studio).await;

    let response = app
        .request(
            "GET",
            "/api/v1/properties/search/advanced?location=eindhoven&houseType=studio&maxRentAmount=700",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let listings = response.body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["houseType"], json!("Studio"));
}
