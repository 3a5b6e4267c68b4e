//! Integration tests for property CRUD operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, property_body};

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_and_get_roundtrip() {
    let app = TestApp::new().await;

    let id = app.create_property(property_body(1)).await;

    let response = app
        .request("GET", &format!("/api/v1/properties/{id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["title"], json!("Canal-side apartment 1"));
    assert_eq!(response.body["propertyId"], json!(id));
    assert_eq!(response.body["image4"], json!("https://img.example/4.jpg"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_duplicate_title_conflict() {
    let app = TestApp::new().await;
    app.create_property(property_body(1)).await;

    // Same title, every other unique field distinct
    let mut body = property_body(2);
    body["title"] = json!("Canal-side apartment 1");

    let token = app.token("manager1", "PROPERTY_MANAGER");
    let response = app
        .request("POST", "/api/v1/properties", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("Canal-side apartment 1")
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_duplicate_postal_code_leaves_store_unchanged() {
    let app = TestApp::new().await;
    app.create_property(property_body(12)).await;

    let mut body = property_body(13);
    body["postalCode"] = json!("5012AB");

    let token = app.token("manager1", "PROPERTY_MANAGER");
    let response = app
        .request("POST", "/api/v1/properties", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(response.body["message"].as_str().unwrap().contains("5012AB"));

    let all = app.request("GET", "/api/v1/properties", None, None).await;
    assert_eq!(all.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_nonexistent_returns_404() {
    let app = TestApp::new().await;

    let token = app.token("manager1", "PROPERTY_MANAGER");
    let response = app
        .request(
            "PUT",
            "/api/v1/properties/99999",
            Some(property_body(1)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], json!(404));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_overwrites_all_fields() {
    let app = TestApp::new().await;
    let id = app.create_property(property_body(1)).await;

    let mut body = property_body(1);
    body["rentAmount"] = json!("1100.00");
    body["bedrooms"] = json!(3);

    let token = app.token("admin1", "ADMIN");
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/properties/{id}"),
            Some(body),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["propertyId"], json!(id));

    let detail = app
        .request("GET", &format!("/api/v1/properties/{id}"), None, None)
        .await;
    assert_eq!(detail.body["rentAmount"], json!("1100.00"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_delete_then_get_returns_404() {
    let app = TestApp::new().await;
    let id = app.create_property(property_body(1)).await;

    let token = app.token("manager1", "PROPERTY_MANAGER");
    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/properties/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["propertyId"], json!(id));

    let detail = app
        .request("GET", &format!("/api/v1/properties/{id}"), None, None)
        .await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_status_changes_only_rented_flag() {
    let app = TestApp::new().await;
    let id = app.create_property(property_body(1)).await;

    let token = app.token("manager1", "PROPERTY_MANAGER");
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/properties/property/{id}"),
            Some(json!({ "propertyIsRented": true })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let all = app.request("GET", "/api/v1/properties", None, None).await;
    let listing = &all.body.as_array().unwrap()[0];
    assert_eq!(listing["isRented"], json!(true));
    assert_eq!(listing["title"], json!("Canal-side apartment 1"));
    assert_eq!(listing["bedrooms"], json!(2));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_requires_authentication() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/v1/properties", Some(property_body(1)), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_rejects_tenant_role() {
    let app = TestApp::new().await;

    let token = app.token("tenant1", "TENANT");
    let response = app
        .request(
            "POST",
            "/api/v1/properties",
            Some(property_body(1)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_validation_failure_returns_field_errors() {
    let app = TestApp::new().await;

    let mut body = property_body(1);
    body["title"] = json!("Flat");
    body["postalCode"] = json!("12345");

    let token = app.token("manager1", "PROPERTY_MANAGER");
    let response = app
        .request("POST", "/api/v1/properties", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], json!(400));
    assert!(response.body["errors"].get("title").is_some());
    assert!(response.body["errors"].get("postal_code").is_some());
}
