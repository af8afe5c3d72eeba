//! Author endpoints of the catalog

use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::Serialize;
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::authors::Author;
use crate::catalog::CatalogState;
use crate::error::{AppError, AppResult};
use crate::support::hal::{HalJson, SelfLinks};

use super::books::BookModel;

pub(crate) fn author_href(id: Uuid) -> String {
    format!("/api/v1/authors/{id}")
}

/// Embedded author representation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorModel {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl AuthorModel {
    pub fn new(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
            links: SelfLinks::to(author_href(author.id)),
        }
    }
}

/// Full author representation; `date_of_death` is omitted when absent.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorDetailsModel {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl AuthorDetailsModel {
    pub fn new(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
            links: SelfLinks::to(author_href(author.id)),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NotableBooksEmbedded {
    pub notable_books: Vec<BookModel>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorDetailsResponse {
    #[serde(flatten)]
    pub author: AuthorDetailsModel,
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<NotableBooksEmbedded>,
}

/// Get author details by ID
#[utoipa::path(
    get,
    path = "/api/v1/authors/{id}",
    tag = "authors",
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = AuthorDetailsResponse),
        (status = 404, description = "Author not found", body = crate::support::problem::Problem)
    )
)]
pub async fn get_author(
    State(state): State<CatalogState>,
    Path(id): Path<Uuid>,
) -> AppResult<HalJson<AuthorDetailsResponse>> {
    let author = state.services.authors.get_author(id).ok_or_else(|| {
        AppError::unknown_entity("Unknown author", format!("No author exists with id '{id}'"))
    })?;

    let notable_books = state.services.books.get_notable_books(author.id);
    let embedded = if notable_books.is_empty() {
        None
    } else {
        Some(NotableBooksEmbedded {
            notable_books: notable_books
                .iter()
                .filter_map(|book| BookModel::new(book, &book.original_language))
                .collect(),
        })
    };

    Ok(HalJson(AuthorDetailsResponse {
        author: AuthorDetailsModel::new(&author),
        embedded,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_date_of_death_is_omitted() {
        let author = Author {
            id: Uuid::nil(),
            name: "Jane Austen".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1775, 12, 16).unwrap(),
            date_of_death: None,
        };
        let rendered = serde_json::to_value(AuthorDetailsModel::new(&author)).unwrap();
        assert_eq!(
            rendered,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "name": "Jane Austen",
                "date_of_birth": "1775-12-16",
                "_links": {"self": {"href": "/api/v1/authors/00000000-0000-0000-0000-000000000000"}}
            })
        );
    }
}
