//! Book referencing endpoints

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::referencing::books::{Book, LocalizedDetail, ReferenceBook};
use crate::referencing::ReferencingState;
use crate::support::hal::{HalJson, NavigationLinks, SelfLinks};
use crate::support::pagination::{PageMetadata, PageParams};
use crate::support::validation::{non_blank, to_problem_errors};

const BOOKS_PATH: &str = "/api/v1/books";

fn book_href(id: Uuid) -> String {
    format!("{BOOKS_PATH}/{id}")
}

/// Book submission payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = validate_unique_language_in_details))]
pub struct BookReferencingRequest {
    pub authors: Vec<Uuid>,
    #[validate(custom(function = non_blank))]
    pub original_language: String,
    #[validate(nested)]
    pub details: Vec<BookReferencingDetail>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookReferencingDetail {
    #[validate(custom(function = non_blank))]
    pub language: String,
    #[validate(custom(function = non_blank))]
    pub title: String,
    #[validate(custom(function = non_blank))]
    pub description: String,
}

fn validate_unique_language_in_details(
    request: &BookReferencingRequest,
) -> Result<(), ValidationError> {
    let mut languages = HashSet::new();
    for detail in &request.details {
        if !languages.insert(detail.language.as_str()) {
            let mut error = ValidationError::new("unique_language_in_details");
            error.message = Some("language is duplicated in details".into());
            error.add_param("pointer".into(), &"/details");
            return Err(error);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetailModel {
    pub language: String,
    pub title: String,
    pub description: String,
}

impl From<&LocalizedDetail> for BookDetailModel {
    fn from(detail: &LocalizedDetail) -> Self {
        Self {
            language: detail.language.clone(),
            title: detail.title.clone(),
            description: detail.description.clone(),
        }
    }
}

/// Referenced book representation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookModel {
    pub id: Uuid,
    pub authors: Vec<Uuid>,
    pub original_language: String,
    pub details: Vec<BookDetailModel>,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl BookModel {
    pub fn new(book: &Book) -> Self {
        Self {
            id: book.id,
            authors: book.authors.clone(),
            original_language: book.original_language.clone(),
            details: book.details.iter().map(BookDetailModel::from).collect(),
            links: SelfLinks::to(book_href(book.id)),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BooksEmbedded {
    pub books: Vec<BookModel>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BooksPageResponse {
    #[serde(rename = "_links")]
    pub links: NavigationLinks,
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<BooksEmbedded>,
    pub page: PageMetadata,
}

/// List referenced books page by page
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "books",
    params(PageParams),
    responses(
        (status = 206, description = "A page of referenced books", body = BooksPageResponse)
    )
)]
pub async fn list_books(
    State(state): State<ReferencingState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let page = state
        .services
        .books_consultation
        .get_page(params.to_request());

    let embedded = if page.is_empty() {
        None
    } else {
        Some(BooksEmbedded {
            books: page.content().iter().map(BookModel::new).collect(),
        })
    };

    let body = BooksPageResponse {
        links: NavigationLinks::for_page(BOOKS_PATH, page.metadata()),
        embedded,
        page: page.metadata(),
    };
    (StatusCode::PARTIAL_CONTENT, HalJson(body))
}

/// Reference a new book
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "books",
    request_body = BookReferencingRequest,
    responses(
        (status = 201, description = "Book referenced", body = BookModel),
        (status = 400, description = "Invalid submission", body = crate::support::problem::Problem)
    )
)]
pub async fn reference_book(
    State(state): State<ReferencingState>,
    Json(request): Json<BookReferencingRequest>,
) -> AppResult<Response> {
    if state.config.validation.enabled {
        request
            .validate()
            .map_err(|errors| AppError::InvalidRequest(to_problem_errors(&errors)))?;
    }

    let command = ReferenceBook {
        authors: request.authors,
        original_language: request.original_language,
        details: request
            .details
            .into_iter()
            .map(|detail| LocalizedDetail {
                language: detail.language,
                title: detail.title,
                description: detail.description,
            })
            .collect(),
    };
    let book = state.services.books_referencing.reference_book(command);

    let model = BookModel::new(&book);
    let location = model.links.self_link.href.clone();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        HalJson(model),
    )
        .into_response())
}

/// Get a referenced book by ID
#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "books",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 501, description = "Not implemented yet")
    )
)]
pub async fn get_book(Path(_id): Path<Uuid>) -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::problem::ProblemError;
    use pretty_assertions::assert_eq;

    fn detail(language: &str) -> BookReferencingDetail {
        BookReferencingDetail {
            language: language.to_string(),
            title: "Emma".to_string(),
            description: "A novel.".to_string(),
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        let request = BookReferencingRequest {
            authors: vec![Uuid::new_v4()],
            original_language: "en".to_string(),
            details: vec![detail("en"), detail("fr")],
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn duplicate_detail_language_points_at_details() {
        let request = BookReferencingRequest {
            authors: vec![],
            original_language: "en".to_string(),
            details: vec![detail("en"), detail("en")],
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            to_problem_errors(&errors),
            vec![ProblemError::pointer(
                "language is duplicated in details",
                "/details"
            )]
        );
    }

    #[test]
    fn blank_detail_field_points_into_the_detail_list() {
        let mut invalid = detail("en");
        invalid.title = "  ".to_string();
        let request = BookReferencingRequest {
            authors: vec![],
            original_language: "en".to_string(),
            details: vec![detail("fr"), invalid],
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            to_problem_errors(&errors),
            vec![ProblemError::pointer("must not be blank", "/details/1/title")]
        );
    }
}
