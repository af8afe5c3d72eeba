//! HAL link models and response helpers

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use super::pagination::PageMetadata;

pub const HAL_JSON: &str = "application/hal+json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// `_links` of a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelfLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

impl SelfLinks {
    pub fn to(href: impl Into<String>) -> Self {
        Self {
            self_link: Link::new(href),
        }
    }
}

/// `_links` of a paged listing.
///
/// `self` is always present. `first` and `last` are present on any
/// non-empty page; `prev` and `next` only when such a page exists. The
/// website relies on this exact combination to gate its navigation.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub first: Option<Link>,
    pub prev: Option<Link>,
    pub next: Option<Link>,
    pub last: Option<Link>,
}

impl NavigationLinks {
    /// Build the navigation links of a page served under `base_path`.
    ///
    /// Hrefs are absolute paths; consumers resolve them against the
    /// service's base URL.
    pub fn for_page(base_path: &str, metadata: PageMetadata) -> Self {
        let href = |number: usize| Link::new(page_href(base_path, number, metadata.size));
        let last_number = metadata.total_pages.saturating_sub(1);
        if metadata.total_pages == 0 {
            return Self {
                self_link: href(metadata.number),
                first: None,
                prev: None,
                next: None,
                last: None,
            };
        }
        Self {
            self_link: href(metadata.number),
            first: Some(href(0)),
            prev: (metadata.number > 0).then(|| href(metadata.number - 1)),
            next: (metadata.number < last_number).then(|| href(metadata.number + 1)),
            last: Some(href(last_number)),
        }
    }
}

fn page_href(base_path: &str, number: usize, size: usize) -> String {
    format!("{base_path}?page={number}&size={size}")
}

/// JSON responder carrying the HAL media type.
pub struct HalJson<T>(pub T);

impl<T: Serialize> IntoResponse for HalJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, HAL_JSON)], body).into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize HAL response: {err}");
                axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(number: usize, size: usize, total_elements: usize, total_pages: usize) -> PageMetadata {
        PageMetadata {
            size,
            total_elements,
            total_pages,
            number,
        }
    }

    #[test]
    fn middle_page_has_all_navigation_links() {
        let links = NavigationLinks::for_page("/api/v1/catalog", metadata(1, 10, 30, 3));
        assert_eq!(links.self_link.href, "/api/v1/catalog?page=1&size=10");
        assert_eq!(links.first.unwrap().href, "/api/v1/catalog?page=0&size=10");
        assert_eq!(links.prev.unwrap().href, "/api/v1/catalog?page=0&size=10");
        assert_eq!(links.next.unwrap().href, "/api/v1/catalog?page=2&size=10");
        assert_eq!(links.last.unwrap().href, "/api/v1/catalog?page=2&size=10");
    }

    #[test]
    fn first_page_has_no_prev_link() {
        let links = NavigationLinks::for_page("/api/v1/authors", metadata(0, 10, 30, 3));
        assert!(links.prev.is_none());
        assert!(links.next.is_some());
        assert!(links.first.is_some());
        assert!(links.last.is_some());
    }

    #[test]
    fn last_page_has_no_next_link() {
        let links = NavigationLinks::for_page("/api/v1/authors", metadata(2, 10, 30, 3));
        assert!(links.next.is_none());
        assert!(links.prev.is_some());
    }

    #[test]
    fn empty_page_only_links_to_itself() {
        let links = NavigationLinks::for_page("/api/v1/catalog", metadata(0, 0, 0, 0));
        assert_eq!(links.self_link.href, "/api/v1/catalog?page=0&size=0");
        assert!(links.first.is_none());
        assert!(links.prev.is_none());
        assert!(links.next.is_none());
        assert!(links.last.is_none());
    }
}
