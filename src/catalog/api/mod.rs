//! REST adapters for the catalog service

pub mod authors;
pub mod books;
pub mod catalog;
pub mod editions;
pub mod openapi;

use axum::http::{header, HeaderMap};
use axum::routing::get;
use axum::Router;

use crate::support::health;

use super::CatalogState;

/// The catalog is served in French unless the request asks otherwise.
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Build the catalog API router
pub fn router(state: CatalogState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/catalog", get(catalog::get_catalog))
        .route("/api/v1/authors/:id", get(authors::get_author))
        .route("/api/v1/books/:id", get(books::get_book))
        .route("/api/v1/editions/:isbn", get(editions::get_edition))
        .with_state(state)
}

/// First language of the `Accept-Language` header, or the default.
pub(crate) fn negotiated_language(headers: &HeaderMap) -> String {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|token| token.split(';').next().unwrap_or(token).trim())
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .map(|tag| {
            tag.split('-')
                .next()
                .unwrap_or(tag)
                .to_ascii_lowercase()
        })
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}
