//! Catalog service: books, authors and editions lookup

pub mod api;
pub mod authors;
pub mod autoload;
pub mod books;
pub mod editions;

use std::sync::Arc;

use crate::config::AppConfig;

/// In-memory repositories backing the catalog.
#[derive(Clone, Default)]
pub struct CatalogRepositories {
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub editions: editions::EditionsRepository,
}

impl CatalogRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Container for the catalog services
#[derive(Clone)]
pub struct CatalogServices {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub catalog: books::CatalogService,
    pub editions: editions::EditionsService,
}

impl CatalogServices {
    pub fn new(repositories: &CatalogRepositories) -> Self {
        Self {
            authors: authors::AuthorsService::new(repositories.authors.clone()),
            books: books::BooksService::new(repositories.books.clone()),
            catalog: books::CatalogService::new(repositories.books.clone()),
            editions: editions::EditionsService::new(repositories.editions.clone()),
        }
    }
}

/// State shared across the catalog handlers
#[derive(Clone)]
pub struct CatalogState {
    pub config: Arc<AppConfig>,
    pub services: Arc<CatalogServices>,
}
