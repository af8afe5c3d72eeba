//! Edition endpoints of the catalog

use axum::extract::{Path, State};
use serde::Serialize;
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::editions::Edition;
use crate::catalog::CatalogState;
use crate::error::{AppError, AppResult};
use crate::support::hal::{HalJson, SelfLinks};
use crate::support::problem::ProblemError;

pub(crate) fn edition_href(isbn: &str) -> String {
    format!("/api/v1/editions/{isbn}")
}

/// Embedded edition representation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EditionModel {
    pub isbn: String,
    pub title: String,
    pub authors: Vec<Uuid>,
    pub language: String,
    pub summary: String,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl EditionModel {
    pub fn new(edition: &Edition) -> Self {
        let mut authors: Vec<_> = edition.authors.iter().collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            isbn: edition.isbn.clone(),
            title: edition.title.clone(),
            authors: authors.into_iter().map(|author| author.id).collect(),
            language: edition.language.clone(),
            summary: edition.summary.clone(),
            links: SelfLinks::to(edition_href(&edition.isbn)),
        }
    }
}

/// Full edition representation; `publisher` is omitted when unknown.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EditionDetailsModel {
    pub isbn: String,
    pub title: String,
    pub publication_date: String,
    pub publisher: Option<String>,
    pub language: String,
    pub summary: String,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl EditionDetailsModel {
    pub fn new(edition: &Edition) -> Self {
        Self {
            isbn: edition.isbn.clone(),
            title: edition.title.clone(),
            publication_date: edition.publication_date.to_string(),
            publisher: edition
                .publisher
                .as_ref()
                .map(|publisher| publisher.name.clone()),
            language: edition.language.clone(),
            summary: edition.summary.clone(),
            links: SelfLinks::to(edition_href(&edition.isbn)),
        }
    }
}

/// Get edition details by ISBN
#[utoipa::path(
    get,
    path = "/api/v1/editions/{isbn}",
    tag = "editions",
    params(
        ("isbn" = String, Path, description = "Edition ISBN")
    ),
    responses(
        (status = 200, description = "Edition details", body = EditionDetailsModel),
        (status = 400, description = "Invalid ISBN", body = crate::support::problem::Problem),
        (status = 404, description = "Edition not found", body = crate::support::problem::Problem)
    )
)]
pub async fn get_edition(
    State(state): State<CatalogState>,
    Path(isbn): Path<String>,
) -> AppResult<HalJson<EditionDetailsModel>> {
    if isbn.parse::<isbn2::Isbn>().is_err() {
        return Err(AppError::InvalidRequest(vec![ProblemError::parameter(
            format!("Input string '{isbn}' is not a valid ISBN"),
            "isbn",
        )]));
    }

    let edition = state.services.editions.get_edition(&isbn).ok_or_else(|| {
        AppError::unknown_entity(
            "Unknown edition",
            format!("No edition exists with ISBN '{isbn}'"),
        )
    })?;

    Ok(HalJson(EditionDetailsModel::new(&edition)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::editions::{PublicationDate, Publisher};
    use crate::catalog::{CatalogRepositories, CatalogServices};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn details_render_publisher_name_and_date_string() {
        let edition = Edition {
            isbn: "9780141439518".to_string(),
            book_id: Uuid::nil(),
            title: "Pride and Prejudice".to_string(),
            publication_date: PublicationDate::Year(1813),
            publisher: Some(Publisher {
                id: Uuid::nil(),
                name: "T. Egerton".to_string(),
            }),
            authors: vec![],
            language: "en".to_string(),
            summary: "A novel of manners.".to_string(),
        };
        let rendered = serde_json::to_value(EditionDetailsModel::new(&edition)).unwrap();
        assert_eq!(
            rendered,
            json!({
                "isbn": "9780141439518",
                "title": "Pride and Prejudice",
                "publication_date": "1813",
                "publisher": "T. Egerton",
                "language": "en",
                "summary": "A novel of manners.",
                "_links": {"self": {"href": "/api/v1/editions/9780141439518"}}
            })
        );
    }

    #[test]
    fn unknown_publisher_is_omitted() {
        let edition = Edition {
            isbn: "9780141439518".to_string(),
            book_id: Uuid::nil(),
            title: "Pride and Prejudice".to_string(),
            publication_date: PublicationDate::Year(1813),
            publisher: None,
            authors: vec![],
            language: "en".to_string(),
            summary: String::new(),
        };
        let rendered = serde_json::to_value(EditionDetailsModel::new(&edition)).unwrap();
        assert!(rendered.get("publisher").is_none());
    }

    fn empty_state() -> CatalogState {
        let config = serde_json::from_value(json!({
            "catalog": {"server": {"host": "127.0.0.1", "port": 8081}},
            "referencing": {"server": {"host": "127.0.0.1", "port": 8082}},
            "website": {"server": {"host": "127.0.0.1", "port": 8080}},
            "logging": {"level": "info", "format": "pretty"}
        }))
        .unwrap();
        CatalogState {
            config: Arc::new(config),
            services: Arc::new(CatalogServices::new(&CatalogRepositories::new())),
        }
    }

    #[tokio::test]
    async fn invalid_isbn_is_rejected_with_a_parameter_error() {
        let result = get_edition(
            State(empty_state()),
            Path("not-an-isbn".to_string()),
        )
        .await;
        let error = result.err().expect("expected an invalid request");
        match error {
            crate::error::AppError::InvalidRequest(errors) => assert_eq!(
                errors,
                vec![ProblemError::parameter(
                    "Input string 'not-an-isbn' is not a valid ISBN",
                    "isbn"
                )]
            ),
            other => panic!("Expected an invalid request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_isbn_is_an_unknown_entity() {
        let result = get_edition(
            State(empty_state()),
            Path("9780141439518".to_string()),
        )
        .await;
        assert!(matches!(
            result,
            Err(crate::error::AppError::UnknownEntity { .. })
        ));
    }
}
