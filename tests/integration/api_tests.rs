//! API integration tests
//!
//! These run against a live server with its Postgres and Redis backends
//! up: `cargo test -- --ignored`

use jsonwebtoken::{encode, EncodingKey, Header};
use randevu_server::models::CallerClaims;
use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Mint a caller token with the development secret
fn auth_token() -> String {
    let claims = CallerClaims {
        sub: "integration-tests".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        role: Some("admin".to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"change-this-secret-in-production"),
    )
    .expect("Failed to sign token")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_available_slots_requires_auth() {
    let client = Client::new();

    let response = client
        .get(format!("{}/available-slots?date=2024-03-04", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_available_slots_missing_date_is_400() {
    let client = Client::new();

    let response = client
        .get(format!("{}/available-slots", BASE_URL))
        .header("Authorization", format!("Bearer {}", auth_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("date"));
}

#[tokio::test]
#[ignore]
async fn test_available_slots_weekday() {
    let client = Client::new();

    let response = client
        .get(format!("{}/available-slots?date=2030-01-07", BASE_URL)) // a Monday
        .header("Authorization", format!("Bearer {}", auth_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isWeekend"], false);
    let available = body["availableSlots"].as_array().expect("array");
    let busy = body["busySlots"].as_array().expect("array");
    // every canonical window is exactly one of available or busy
    assert_eq!(available.len() + busy.len(), 5);
}

#[tokio::test]
#[ignore]
async fn test_available_slots_weekend_is_closed() {
    let client = Client::new();

    let response = client
        .get(format!("{}/available-slots?date=2030-01-05", BASE_URL)) // a Saturday
        .header("Authorization", format!("Bearer {}", auth_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isWeekend"], true);
    assert!(body["availableSlots"].as_array().unwrap().is_empty());
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_admin_availability() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/admin/availability?startDate=2030-01-07&endDate=2030-01-11",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", auth_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["busySlots"].is_object());
    assert_eq!(body["workingHours"]["start"], "09:00");
    assert_eq!(body["workingHours"]["end"], "19:00");
    assert_eq!(body["weekendClosed"], true);
}

#[tokio::test]
#[ignore]
async fn test_admin_availability_inverted_range_is_400() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/admin/availability?startDate=2030-01-11&endDate=2030-01-07",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", auth_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
