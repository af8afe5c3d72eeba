//! Author referencing endpoints

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::referencing::authors::{
    AliveOrDead, Author, InvalidReferenceAuthor, ReferenceAuthor,
};
use crate::referencing::ReferencingState;
use crate::support::hal::{HalJson, NavigationLinks, SelfLinks};
use crate::support::pagination::{PageMetadata, PageParams};
use crate::support::problem::ProblemError;
use crate::support::validation::{non_blank, to_problem_errors};

const AUTHORS_PATH: &str = "/api/v1/authors";

fn author_href(id: Uuid) -> String {
    format!("{AUTHORS_PATH}/{id}")
}

/// Author submission payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = validate_born_before_dead))]
pub struct AuthorReferencingRequest {
    #[validate(custom(function = non_blank))]
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

impl AliveOrDead for AuthorReferencingRequest {
    fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    fn date_of_death(&self) -> Option<NaiveDate> {
        self.date_of_death
    }
}

fn validate_born_before_dead(request: &AuthorReferencingRequest) -> Result<(), ValidationError> {
    if request.is_born_before_dead() {
        return Ok(());
    }
    let mut error = ValidationError::new("born_before_dead");
    error.message = Some("An author cannot be dead before being born".into());
    error.add_param("pointer".into(), &"/date_of_death");
    Err(error)
}

/// Referenced author representation; `date_of_death` is omitted when absent.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorModel {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
    #[serde(rename = "_links")]
    pub links: SelfLinks,
}

impl AuthorModel {
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
pub struct AuthorsEmbedded {
    pub authors: Vec<AuthorModel>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorsPageResponse {
    #[serde(rename = "_links")]
    pub links: NavigationLinks,
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<AuthorsEmbedded>,
    pub page: PageMetadata,
}

/// List referenced authors page by page
#[utoipa::path(
    get,
    path = "/api/v1/authors",
    tag = "authors",
    params(PageParams),
    responses(
        (status = 206, description = "A page of referenced authors", body = AuthorsPageResponse)
    )
)]
pub async fn list_authors(
    State(state): State<ReferencingState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let page = state
        .services
        .authors_consultation
        .get_page(params.to_request());

    let embedded = if page.is_empty() {
        None
    } else {
        Some(AuthorsEmbedded {
            authors: page.content().iter().map(AuthorModel::new).collect(),
        })
    };

    let body = AuthorsPageResponse {
        links: NavigationLinks::for_page(AUTHORS_PATH, page.metadata()),
        embedded,
        page: page.metadata(),
    };
    (StatusCode::PARTIAL_CONTENT, HalJson(body))
}

/// Reference a new author
#[utoipa::path(
    post,
    path = "/api/v1/authors",
    tag = "authors",
    request_body = AuthorReferencingRequest,
    responses(
        (status = 201, description = "Author referenced", body = AuthorModel),
        (status = 400, description = "Invalid submission", body = crate::support::problem::Problem)
    )
)]
pub async fn reference_author(
    State(state): State<ReferencingState>,
    Json(request): Json<AuthorReferencingRequest>,
) -> AppResult<Response> {
    if state.config.validation.enabled {
        request
            .validate()
            .map_err(|errors| AppError::InvalidRequest(to_problem_errors(&errors)))?;
    }

    let command =
        ReferenceAuthor::new(&request.name, request.date_of_birth, request.date_of_death)
            .map_err(invalid_command)?;
    let author = state.services.authors_referencing.reference_author(command);

    let model = AuthorModel::new(&author);
    let location = model.links.self_link.href.clone();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        HalJson(model),
    )
        .into_response())
}

fn invalid_command(error: InvalidReferenceAuthor) -> AppError {
    let pointer = match error {
        InvalidReferenceAuthor::EmptyName => "/name",
        InvalidReferenceAuthor::DeadBeforeBorn => "/date_of_death",
    };
    AppError::InvalidRequest(vec![ProblemError::pointer(error.to_string(), pointer)])
}

/// Get a referenced author by ID
#[utoipa::path(
    get,
    path = "/api/v1/authors/{id}",
    tag = "authors",
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 501, description = "Not implemented yet")
    )
)]
pub async fn get_author(Path(_id): Path<Uuid>) -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
