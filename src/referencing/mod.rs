//! Referencing service: author and book submission

pub mod api;
pub mod authors;
pub mod books;

use std::sync::Arc;

use crate::config::AppConfig;

/// In-memory repositories backing the referencing service.
#[derive(Clone, Default)]
pub struct ReferencingRepositories {
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
}

impl ReferencingRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Container for the referencing services
#[derive(Clone)]
pub struct ReferencingServices {
    pub authors_consultation: authors::AuthorsConsultationService,
    pub authors_referencing: authors::AuthorsReferencingService,
    pub books_consultation: books::BooksConsultationService,
    pub books_referencing: books::BooksReferencingService,
}

impl ReferencingServices {
    pub fn new(repositories: &ReferencingRepositories) -> Self {
        Self {
            authors_consultation: authors::AuthorsConsultationService::new(
                repositories.authors.clone(),
            ),
            authors_referencing: authors::AuthorsReferencingService::new(
                repositories.authors.clone(),
            ),
            books_consultation: books::BooksConsultationService::new(repositories.books.clone()),
            books_referencing: books::BooksReferencingService::new(repositories.books.clone()),
        }
    }
}

/// State shared across the referencing handlers
#[derive(Clone)]
pub struct ReferencingState {
    pub config: Arc<AppConfig>,
    pub services: Arc<ReferencingServices>,
}
