//! REST client consuming the catalog service

use async_trait::async_trait;
use axum::http::header;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::config::CatalogClientConfig;

use super::navigation::{NavigablePage, PageLink};

/// Books are listed ten per page on the website.
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub authors: Vec<Author>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edition {
    pub isbn: String,
    pub title: String,
    pub publisher: Option<String>,
    pub publication_date: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub authors: Vec<Author>,
    pub editions: Vec<Edition>,
}

#[derive(Debug, Error)]
pub enum CatalogClientError {
    #[error("The catalog did not answer in time")]
    Timeout,

    #[error("{detail}")]
    Upstream { detail: String },

    #[error("Unable to reach the catalog: {0}")]
    Transport(reqwest::Error),

    #[error("Cannot browse to page through link {0} from current")]
    UnknownLink(String),
}

impl From<reqwest::Error> for CatalogClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CatalogClientError::Timeout
        } else {
            CatalogClientError::Transport(error)
        }
    }
}

/// Read access to the catalog, as the website needs it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn list_books(
        &self,
        accept_languages: &str,
    ) -> Result<NavigablePage<Book>, CatalogClientError>;

    async fn list_books_page(
        &self,
        page_number: usize,
        accept_languages: &str,
    ) -> Result<NavigablePage<Book>, CatalogClientError>;

    async fn follow_link(
        &self,
        current: &NavigablePage<Book>,
        link_name: &str,
        accept_languages: &str,
    ) -> Result<NavigablePage<Book>, CatalogClientError>;

    async fn get_book(
        &self,
        id: Uuid,
        accept_languages: &str,
    ) -> Result<BookDetail, CatalogClientError>;
}

/// reqwest-backed implementation of [`CatalogClient`].
pub struct CatalogRestClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogRestClient {
    pub fn new(config: &CatalogClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(
        &self,
        uri: &str,
        accept_languages: &str,
    ) -> Result<reqwest::Response, CatalogClientError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, uri))
            .header(header::ACCEPT.as_str(), "application/json")
            .header(header::ACCEPT_LANGUAGE.as_str(), accept_languages)
            .send()
            .await?;
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let detail = response
            .json::<ProblemDto>()
            .await
            .ok()
            .and_then(|problem| problem.detail.or(problem.title))
            .unwrap_or_else(|| format!("The catalog answered with status {status}"));
        Err(CatalogClientError::Upstream { detail })
    }

    async fn fetch_page(
        &self,
        uri: &str,
        accept_languages: &str,
    ) -> Result<NavigablePage<Book>, CatalogClientError> {
        tracing::debug!("List books through URI {uri} in accept languages {accept_languages}");
        let page: BooksPageDto = self.get(uri, accept_languages).await?.json().await?;
        Ok(page.into_page())
    }
}

#[async_trait]
impl CatalogClient for CatalogRestClient {
    async fn list_books(
        &self,
        accept_languages: &str,
    ) -> Result<NavigablePage<Book>, CatalogClientError> {
        self.list_books_page(0, accept_languages).await
    }

    async fn list_books_page(
        &self,
        page_number: usize,
        accept_languages: &str,
    ) -> Result<NavigablePage<Book>, CatalogClientError> {
        tracing::info!("List books for page {page_number} in accept languages {accept_languages}");
        self.fetch_page(
            &format!("/api/v1/catalog?page={page_number}&size={PAGE_SIZE}"),
            accept_languages,
        )
        .await
    }

    async fn follow_link(
        &self,
        current: &NavigablePage<Book>,
        link_name: &str,
        accept_languages: &str,
    ) -> Result<NavigablePage<Book>, CatalogClientError> {
        let href = current
            .link(link_name)
            .ok_or_else(|| CatalogClientError::UnknownLink(link_name.to_string()))?;
        tracing::info!("List books for link {link_name} in accept languages {accept_languages}");
        self.fetch_page(href, accept_languages).await
    }

    async fn get_book(
        &self,
        id: Uuid,
        accept_languages: &str,
    ) -> Result<BookDetail, CatalogClientError> {
        tracing::info!("Get book {id} in accept languages {accept_languages}");
        let book: BookDetailDto = self
            .get(&format!("/api/v1/books/{id}"), accept_languages)
            .await?
            .json()
            .await?;

        let mut editions = Vec::with_capacity(book.links.editions.len());
        for link in &book.links.editions {
            tracing::debug!("Retrieve book {id} edition through {}", link.href);
            let edition: EditionDetailDto =
                self.get(&link.href, accept_languages).await?.json().await?;
            editions.push(edition.into_edition());
        }

        Ok(book.into_detail(editions))
    }
}

#[derive(Debug, Deserialize)]
struct ProblemDto {
    title: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LinkValue {
    href: String,
}

#[derive(Debug, Deserialize)]
struct BooksPageDto {
    page: PageAttributesDto,
    #[serde(rename = "_links", default)]
    links: PageLinksDto,
    #[serde(rename = "_embedded")]
    embedded: Option<PageEmbeddedDto>,
}

#[derive(Debug, Deserialize)]
struct PageAttributesDto {
    size: usize,
    total_elements: usize,
    total_pages: usize,
    number: usize,
}

#[derive(Debug, Default, Deserialize)]
struct PageLinksDto {
    first: Option<LinkValue>,
    prev: Option<LinkValue>,
    next: Option<LinkValue>,
    last: Option<LinkValue>,
}

impl PageLinksDto {
    fn converted(self) -> Vec<PageLink> {
        [
            ("first", self.first),
            ("prev", self.prev),
            ("next", self.next),
            ("last", self.last),
        ]
        .into_iter()
        .filter_map(|(name, link)| {
            link.map(|link| PageLink {
                name: name.to_string(),
                href: link.href,
            })
        })
        .collect()
    }
}

#[derive(Debug, Deserialize)]
struct PageEmbeddedDto {
    #[serde(default)]
    books: Vec<BookDto>,
    #[serde(default)]
    authors: Vec<AuthorDto>,
}

#[derive(Debug, Deserialize)]
struct BookDto {
    id: Uuid,
    title: String,
    #[serde(default)]
    authors: Vec<Uuid>,
    description: String,
}

impl BookDto {
    fn with_authors_from(self, authors: &[AuthorDto]) -> Book {
        let resolved = self
            .authors
            .iter()
            .filter_map(|id| {
                authors
                    .iter()
                    .find(|author| author.id == *id)
                    .map(AuthorDto::to_author)
            })
            .collect();
        Book {
            id: self.id,
            title: self.title,
            authors: resolved,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthorDto {
    id: Uuid,
    name: String,
}

impl AuthorDto {
    fn to_author(&self) -> Author {
        Author {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl BooksPageDto {
    fn into_page(self) -> NavigablePage<Book> {
        let books = self
            .embedded
            .map(|embedded| {
                embedded
                    .books
                    .into_iter()
                    .map(|book| book.with_authors_from(&embedded.authors))
                    .collect()
            })
            .unwrap_or_default();
        NavigablePage::new(
            books,
            self.page.number,
            self.page.size,
            self.page.total_elements,
            self.page.total_pages,
            self.links.converted(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct BookDetailDto {
    id: Uuid,
    title: String,
    description: String,
    #[serde(rename = "_links")]
    links: BookDetailLinksDto,
    #[serde(rename = "_embedded", default)]
    embedded: BookDetailEmbeddedDto,
}

#[derive(Debug, Deserialize)]
struct BookDetailLinksDto {
    #[serde(default)]
    editions: Vec<LinkValue>,
}

#[derive(Debug, Default, Deserialize)]
struct BookDetailEmbeddedDto {
    #[serde(default)]
    authors: Vec<AuthorDto>,
}

impl BookDetailDto {
    fn into_detail(self, editions: Vec<Edition>) -> BookDetail {
        BookDetail {
            id: self.id,
            title: self.title,
            description: self.description,
            authors: self
                .embedded
                .authors
                .iter()
                .map(AuthorDto::to_author)
                .collect(),
            editions,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EditionDetailDto {
    isbn: String,
    title: String,
    publisher: Option<String>,
    publication_date: String,
    language: String,
}

impl EditionDetailDto {
    fn into_edition(self) -> Edition {
        Edition {
            isbn: self.isbn,
            title: self.title,
            publisher: self.publisher,
            publication_date: self.publication_date,
            language: self.language,
        }
    }
}
