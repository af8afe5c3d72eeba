//! REST adapters for the referencing service

pub mod authors;
pub mod books;
pub mod openapi;

use axum::routing::get;
use axum::Router;

use crate::support::health;

use super::ReferencingState;

/// Build the referencing API router
pub fn router(state: ReferencingState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/v1/authors",
            get(authors::list_authors).post(authors::reference_author),
        )
        .route("/api/v1/authors/:id", get(authors::get_author))
        .route(
            "/api/v1/books",
            get(books::list_books).post(books::reference_book),
        )
        .route("/api/v1/books/:id", get(books::get_book))
        .with_state(state)
}
