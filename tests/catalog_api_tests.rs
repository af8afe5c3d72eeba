//! Catalog API integration tests
//!
//! Run against a live catalog service: `cargo test -- --ignored`

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8081";

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
async fn test_catalog_page_is_partial_content() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/v1/catalog?page=0&size=10", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 206);

    let body: Value = response.json().await.expect("Failed to parse response");
    let page = &body["page"];
    assert!(page["size"].is_number());
    assert!(page["total_elements"].is_number());
    assert!(page["total_pages"].is_number());
    assert!(page["number"].is_number());
    assert!(body["_links"]["self"]["href"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_catalog_negotiates_content_language() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/v1/catalog", BASE_URL))
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 206);
    assert_eq!(
        response
            .headers()
            .get("Content-Language")
            .and_then(|v| v.to_str().ok()),
        Some("en")
    );
}

#[tokio::test]
#[ignore]
async fn test_unknown_author_is_a_problem() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/v1/authors/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    assert_eq!(
        response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["type"], "/problems/unknown-entity");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
#[ignore]
async fn test_invalid_isbn_is_an_invalid_request_problem() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/v1/editions/not-an-isbn", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["type"], "/problems/invalid-request");
    assert_eq!(body["errors"][0]["parameter"], "isbn");
}
