//! Integration tests for the calculator HTTP boundary.
//!
//! These tests wire a catalog loaded from a YAML file through the full
//! application router, the same way the server binary does.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use franchise_calculator::adapters::{app_router, CalculatorAppState, YamlCatalogSource};
use franchise_calculator::config::{AppConfig, CalculatorConfig};
use franchise_calculator::ports::ProfileCatalogSource;

// =============================================================================
// Test Infrastructure
// =============================================================================

const CATALOG: &str = r#"
industries:
  - name: Bakery
    cogs_ratio: 0.30
    labor_ratio: 0.22
    misc_ratio: 0.12
    description: Early mornings, thin margins.
    reality_check: food_cost
"#;

async fn app_with_catalog_file() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("industries.yaml");
    std::fs::write(&path, CATALOG).unwrap();

    let config = AppConfig {
        calculator: CalculatorConfig {
            catalog_path: Some(path.clone()),
            asset_kit_url: "https://kit.example.com".to_string(),
            ..CalculatorConfig::default()
        },
        ..AppConfig::default()
    };
    config.validate().unwrap();

    let catalog = YamlCatalogSource::new(&path).load().await.unwrap();
    let state = CalculatorAppState::new(
        catalog,
        config.calculator.input_limits(),
        config.calculator.asset_kit_url.clone(),
    );
    (app_router(state, &config.server).unwrap(), temp_dir)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn evaluate_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn custom_industry_is_listed_after_builtins() {
    let (app, _dir) = app_with_catalog_file().await;
    let request = Request::builder()
        .uri("/api/industries")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 6);
    assert_eq!(names[5], "Bakery");
}

#[tokio::test]
async fn custom_industry_can_be_evaluated() {
    let (app, _dir) = app_with_catalog_file().await;

    let (status, body) = send(
        app,
        evaluate_request(json!({
            "industry": "Bakery",
            "setup_cost": 60000,
            "monthly_rent": 2000,
            "daily_footfall": 150,
            "ticket_size": 8
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["monthly_revenue"], 36000.0);
    assert_eq!(body["industry_description"], "Early mornings, thin margins.");
    assert!(body["reality_check"]
        .as_str()
        .unwrap()
        .starts_with("Your COGS are 30.0%."));
    assert_eq!(body["asset_kit_url"], "https://kit.example.com");
}

#[tokio::test]
async fn losing_location_has_null_payback() {
    let (app, _dir) = app_with_catalog_file().await;

    let (status, body) = send(
        app,
        evaluate_request(json!({
            "industry": "Fitness/Gym",
            "setup_cost": 100000,
            "monthly_rent": 5000,
            "daily_footfall": 10,
            "ticket_size": 5
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["payback_months"].is_null());
    assert_eq!(body["verdict"]["signal"], "RED");
    assert_eq!(body["verdict"]["label"], "Negative Cashflow");
    assert!(body["reality_check"]
        .as_str()
        .unwrap()
        .contains("If footfall drops to 7,"));
}

#[tokio::test]
async fn setup_cost_below_minimum_is_bad_request() {
    let (app, _dir) = app_with_catalog_file().await;

    let (status, body) = send(
        app,
        evaluate_request(json!({
            "industry": "Bakery",
            "setup_cost": 10,
            "monthly_rent": 2000,
            "daily_footfall": 150,
            "ticket_size": 8
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "setup_cost");
}
