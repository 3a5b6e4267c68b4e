//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use lettinghub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application against a clean database
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db_pool = lettinghub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        lettinghub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        sqlx::query("DELETE FROM properties")
            .execute(&db_pool)
            .await
            .expect("Failed to clean test database");

        let property_repo = Arc::new(
            lettinghub_database::repositories::property::PropertyRepository::new(db_pool.clone()),
        );
        let property_service = Arc::new(lettinghub_service::property::PropertyService::new(
            Arc::clone(&property_repo),
        ));
        let jwt_decoder = Arc::new(lettinghub_api::auth::decoder::JwtDecoder::new(&config.auth));

        let app_state = lettinghub_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            jwt_decoder,
            property_repo,
            property_service,
        };

        let router = lettinghub_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Issue a signed bearer token with the given role
    pub fn token(&self, username: &str, role: &str) -> String {
        let now = Utc::now().timestamp();
        let claims = json!({
            "sub": username,
            "role": role,
            "iat": now,
            "exp": now + 3600,
        });

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.auth.jwt_secret.as_bytes()),
        )
        .expect("Failed to sign test token")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a listing as a property manager and return its id
    pub async fn create_property(&self, body: Value) -> i64 {
        let token = self.token("manager1", "PROPERTY_MANAGER");
        let response = self
            .request("POST", "/api/v1/properties", Some(body), Some(&token))
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create failed: {:?}",
            response.body
        );

        response
            .body
            .get("propertyId")
            .and_then(Value::as_i64)
            .expect("No propertyId in create response")
    }
}

/// A distinct, valid create-property body. `n` is mixed into every unique
/// field so multiple listings can coexist.
pub fn property_body(n: u32) -> Value {
    json!({
        "title": format!("Canal-side apartment {n}"),
        "description": "Bright two-room apartment near the station",
        "propertyType": "Apartment",
        "quantity": 1,
        "locationType": "TILBURG",
        "rentAmount": "950.00",
        "securityDeposit": "500.00",
        "streetAddress": format!("Heuvelring {n}"),
        "rentalCondition": "Minimum stay 12 months",
        "surfaceArea": format!("{} m2", 60 + n),
        "postalCode": format!("50{:02}AB", n % 100),
        "interior": format!("Furnished with oak flooring, unit {n}"),
        "availableDate": "2026-09-01",
        "bedrooms": 2,
        "image": "https://img.example/1.jpg",
        "image2": "https://img.example/2.jpg",
        "image3": "https://img.example/3.jpg",
        "image4": "https://img.example/4.jpg",
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
