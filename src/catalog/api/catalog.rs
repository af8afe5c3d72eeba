//! Paginated catalog browsing endpoint

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::authors::Author;
use crate::catalog::CatalogState;
use crate::support::hal::{HalJson, NavigationLinks};
use crate::support::pagination::{PageMetadata, PageParams};

use super::authors::AuthorModel;
use super::books::BookModel;
use super::editions::EditionModel;
use super::negotiated_language;

const CATALOG_PATH: &str = "/api/v1/catalog";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogEmbedded {
    pub books: Vec<BookModel>,
    // The editions relation is kept alongside books to let API consumers
    // move between the two relations.
    pub editions: Vec<EditionModel>,
    pub authors: Vec<AuthorModel>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogPageResponse {
    #[serde(rename = "_links")]
    pub links: NavigationLinks,
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<CatalogEmbedded>,
    pub page: PageMetadata,
}

/// Browse the catalog page by page
#[utoipa::path(
    get,
    path = "/api/v1/catalog",
    tag = "catalog",
    params(PageParams),
    responses(
        (status = 206, description = "A page of the catalog", body = CatalogPageResponse)
    )
)]
pub async fn get_catalog(
    State(state): State<CatalogState>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Response {
    let language = negotiated_language(&headers);
    let page = state.services.catalog.get_page(params.to_request());
    let links = NavigationLinks::for_page(CATALOG_PATH, page.metadata());

    let embedded = if page.is_empty() {
        None
    } else {
        let book_ids: Vec<Uuid> = page.content().iter().map(|book| book.id).collect();

        let mut books = Vec::with_capacity(page.content().len());
        for book in page.content() {
            match BookModel::new(book, &language) {
                Some(model) => books.push(model),
                None => tracing::warn!("Book {} has no localized details", book.id),
            }
        }

        let editions = state
            .services
            .editions
            .get_books_editions(&book_ids)
            .iter()
            .map(EditionModel::new)
            .collect();

        Some(CatalogEmbedded {
            books,
            editions,
            authors: page_authors(page.content()),
        })
    };

    let body = CatalogPageResponse {
        links,
        embedded,
        page: page.metadata(),
    };
    (
        StatusCode::PARTIAL_CONTENT,
        [(header::CONTENT_LANGUAGE, language)],
        HalJson(body),
    )
        .into_response()
}

/// Deduplicated authors of the page's books, ordered by name.
fn page_authors(books: &[crate::catalog::books::Book]) -> Vec<AuthorModel> {
    let mut unique: IndexMap<Uuid, &Author> = IndexMap::new();
    for book in books {
        for author in &book.authors {
            unique.entry(author.id).or_insert(author);
        }
    }
    let mut authors: Vec<_> = unique.into_values().collect();
    authors.sort_by(|a, b| a.name.cmp(&b.name));
    authors.into_iter().map(AuthorModel::new).collect()
}
