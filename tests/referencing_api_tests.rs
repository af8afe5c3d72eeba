//! Referencing API integration tests
//!
//! Run against a live referencing service: `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8082";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_reference_then_list_author() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/v1/authors", BASE_URL))
        .json(&json!({
            "name": "Jane Austen",
            "date_of_birth": "1775-12-16"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .expect("No Location header")
        .to_string();

    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["name"], "Jane Austen");
    assert_eq!(created["date_of_birth"], "1775-12-16");
    assert!(created.get("date_of_death").is_none());
    assert_eq!(created["_links"]["self"]["href"], location);

    let listing = client
        .get(format!("{}/api/v1/authors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(listing.status(), 206);

    let body: Value = listing.json().await.expect("Failed to parse response");
    let authors = body["_embedded"]["authors"]
        .as_array()
        .expect("No embedded authors");
    assert!(authors
        .iter()
        .any(|author| author["id"] == created["id"] && author["name"] == "Jane Austen"));
}

#[tokio::test]
#[ignore]
async fn test_author_dead_before_born_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/v1/authors", BASE_URL))
        .json(&json!({
            "name": "Impossible",
            "date_of_birth": "1817-07-18",
            "date_of_death": "1775-12-16"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["type"], "/problems/invalid-request");
    assert_eq!(body["errors"][0]["pointer"], "/date_of_death");
}

#[tokio::test]
#[ignore]
async fn test_reference_book_with_duplicate_language_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/v1/books", BASE_URL))
        .json(&json!({
            "authors": [],
            "original_language": "en",
            "details": [
                {"language": "en", "title": "Emma", "description": "A novel."},
                {"language": "en", "title": "Emma again", "description": "Still a novel."}
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"][0]["pointer"], "/details");
}

#[tokio::test]
#[ignore]
async fn test_single_author_resource_is_not_implemented() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/v1/authors/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 501);
}
