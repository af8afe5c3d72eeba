//! Offset/limit pagination over in-memory collections

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Query parameters of the paged listing endpoints.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageParams {
    /// Page number (default: 0)
    pub page: Option<usize>,
    /// Page size (default: 50)
    pub size: Option<usize>,
}

impl PageParams {
    pub fn to_request(self) -> PageRequest {
        PageRequest::of(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// An offset-and-limit page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    pub number: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn of(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    pub fn offset(&self) -> usize {
        self.number * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::of(0, DEFAULT_PAGE_SIZE)
    }
}

/// Page metadata rendered under the `page` key of listing responses.
///
/// Field order is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMetadata {
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub number: usize,
}

/// A slice of a backing collection together with total-count metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    metadata: PageMetadata,
}

impl<T> Page<T> {
    /// The explicit empty-page representation, with all-zero metadata.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            metadata: PageMetadata {
                size: 0,
                total_elements: 0,
                total_pages: 0,
                number: 0,
            },
        }
    }

    pub fn new(content: Vec<T>, request: PageRequest, total_elements: usize) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_elements.div_ceil(request.size)
        };
        Self {
            content,
            metadata: PageMetadata {
                size: request.size,
                total_elements,
                total_pages,
                number: request.number,
            },
        }
    }

    /// Slice a backing collection by the request's offset and limit.
    ///
    /// An empty collection yields the empty-page representation.
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        if all.is_empty() {
            return Self::empty();
        }
        let content = all
            .iter()
            .skip(request.offset())
            .take(request.size)
            .cloned()
            .collect();
        Self::new(content, request, all.len())
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn metadata(&self) -> PageMetadata {
        self.metadata
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn number(&self) -> usize {
        self.metadata.number
    }

    pub fn total_pages(&self) -> usize {
        self.metadata.total_pages
    }
}
