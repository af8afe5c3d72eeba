//! RFC 7807 problem bodies

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

pub const INVALID_REQUEST_TYPE: &str = "/problems/invalid-request";
pub const UNKNOWN_ENTITY_TYPE: &str = "/problems/unknown-entity";

/// The origin of a single error inside a validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ProblemError {
    /// A request parameter is the source of the error.
    Parameter { detail: String, parameter: String },
    /// A part of the request body, identified by a JSON pointer, is the
    /// source of the error.
    Pointer { detail: String, pointer: String },
}

impl ProblemError {
    pub fn parameter(detail: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::Parameter {
            detail: detail.into(),
            parameter: parameter.into(),
        }
    }

    pub fn pointer(detail: impl Into<String>, pointer: impl Into<String>) -> Self {
        Self::Pointer {
            detail: detail.into(),
            pointer: pointer.into(),
        }
    }
}

/// An RFC 7807 problem detail body.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: Option<String>,
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ProblemError>,
}

/// The problem reported for any request rejected by validation.
///
/// The error list is carried verbatim under the `errors` property.
pub fn invalid_request(errors: Vec<ProblemError>) -> Problem {
    Problem {
        problem_type: INVALID_REQUEST_TYPE.to_string(),
        title: "Request validation error".to_string(),
        status: StatusCode::BAD_REQUEST.as_u16(),
        detail: Some(
            "Request parameters or body are invalid compared to the OpenAPI specification. \
             See errors for more information"
                .to_string(),
        ),
        instance: None,
        errors,
    }
}

pub fn unknown_entity(title: impl Into<String>, detail: impl Into<String>) -> Problem {
    Problem {
        problem_type: UNKNOWN_ENTITY_TYPE.to_string(),
        title: title.into(),
        status: StatusCode::NOT_FOUND.as_u16(),
        detail: Some(detail.into()),
        instance: None,
        errors: Vec::new(),
    }
}

pub fn internal_error() -> Problem {
    Problem {
        problem_type: "about:blank".to_string(),
        title: "Internal server error".to_string(),
        status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        detail: None,
        instance: None,
        errors: Vec::new(),
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match serde_json::to_vec(&self) {
            Ok(body) => (
                status,
                [(header::CONTENT_TYPE, APPLICATION_PROBLEM_JSON)],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize problem body: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
