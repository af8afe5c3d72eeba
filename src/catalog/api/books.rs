//! Book endpoints of the catalog

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::books::Book;
use crate::catalog::CatalogState;
use crate::error::{AppError, AppResult};
use crate::support::hal::{HalJson, Link, SelfLinks};

use super::authors::AuthorModel;
use super::editions::edition_href;
use super::negotiated_language;

pub(crate) fn book_href(id: Uuid) -> String {
    format!("/api/v1/books/{id}")
}

/// Author ids of a book, ordered by author name.
fn author_ids_by_name(book: &Book) -> Vec<Uuid> {
    let mut authors: Vec<_> = book.authors.iter().collect();
    authors.sort_by(|a, b| a.name.cmp(&b.name));
    authors.into_iter().map(|author| author.id).collect()
}

/// Embedded book representation, rendered in a single language.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub authors: Vec<Uuid>,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl BookModel {
    /// `None` when the book carries no details at all.
    pub fn new(book: &Book, language: &str) -> Option<Self> {
        let details = book.localized(language)?;
        Some(Self {
            id: book.id,
            title: details.title.clone(),
            description: details.description.clone(),
            authors: author_ids_by_name(book),
            links: SelfLinks::to(book_href(book.id)),
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetailsLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub editions: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorsEmbedded {
    pub authors: Vec<AuthorModel>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetailsResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "_links")]
    pub links: BookDetailsLinks,
    #[serde(rename = "_embedded")]
    pub embedded: AuthorsEmbedded,
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "books",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailsResponse),
        (status = 404, description = "Book not found", body = crate::support::problem::Problem)
    )
)]
pub async fn get_book(
    State(state): State<CatalogState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> AppResult<HalJson<BookDetailsResponse>> {
    let book = state.services.books.get_book(id).ok_or_else(|| {
        AppError::unknown_entity("Unknown book", format!("No book exists with id '{id}'"))
    })?;

    let language = negotiated_language(&headers);
    let details = book
        .localized(&language)
        .ok_or_else(|| AppError::Internal(format!("Book {id} has no localized details")))?;

    let mut authors: Vec<_> = book.authors.iter().collect();
    authors.sort_by(|a, b| a.name.cmp(&b.name));

    let editions = state
        .services
        .editions
        .get_book_editions(book.id)
        .iter()
        .map(|edition| Link::new(edition_href(&edition.isbn)))
        .collect();

    Ok(HalJson(BookDetailsResponse {
        id: book.id,
        title: details.title.clone(),
        description: details.description.clone(),
        links: BookDetailsLinks {
            self_link: Link::new(book_href(book.id)),
            editions,
        },
        embedded: AuthorsEmbedded {
            authors: authors.into_iter().map(AuthorModel::new).collect(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::authors::Author;
    use crate::catalog::books::LocalizedDetails;
    use chrono::NaiveDate;

    fn author(id: u128, name: &str) -> Author {
        Author {
            id: Uuid::from_u128(id),
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1800, 1, 1).unwrap(),
            date_of_death: None,
        }
    }

    #[test]
    fn book_model_orders_author_ids_by_name() {
        let book = Book {
            id: Uuid::from_u128(1),
            authors: vec![author(2, "Victor Hugo"), author(1, "Jane Austen")],
            original_language: "en".to_string(),
            details: vec![LocalizedDetails {
                language: "en".to_string(),
                title: "Anthology".to_string(),
                description: "A mix.".to_string(),
                links: vec![],
            }],
        };
        let model = BookModel::new(&book, "en").unwrap();
        assert_eq!(model.authors, vec![Uuid::from_u128(1), Uuid::from_u128(2)]);
        assert_eq!(model.title, "Anthology");
    }

    #[test]
    fn book_model_renders_requested_language() {
        let book = Book {
            id: Uuid::from_u128(1),
            authors: vec![],
            original_language: "fr".to_string(),
            details: vec![
                LocalizedDetails {
                    language: "fr".to_string(),
                    title: "L'Étranger".to_string(),
                    description: "Un roman.".to_string(),
                    links: vec![],
                },
                LocalizedDetails {
                    language: "en".to_string(),
                    title: "The Stranger".to_string(),
                    description: "A novel.".to_string(),
                    links: vec![],
                },
            ],
        };
        assert_eq!(BookModel::new(&book, "en").unwrap().title, "The Stranger");
        assert_eq!(BookModel::new(&book, "de").unwrap().title, "L'Étranger");
    }
}
