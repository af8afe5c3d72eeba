//! Referencing books: command, model, repository and services

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::support::pagination::{Page, PageRequest};

/// The title and description of a book in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedDetail {
    pub language: String,
    pub title: String,
    pub description: String,
}

/// A referenced book, compared by identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub authors: Vec<Uuid>,
    pub original_language: String,
    pub details: Vec<LocalizedDetail>,
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

/// Command to reference a new book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceBook {
    pub authors: Vec<Uuid>,
    pub original_language: String,
    pub details: Vec<LocalizedDetail>,
}

/// Keyed by identifier, preserving insertion order for listing.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<IndexMap<Uuid, Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_page(&self, request: PageRequest) -> Page<Book> {
        let books = self.books.read().expect("books store poisoned");
        if books.is_empty() {
            return Page::empty();
        }
        let content = books
            .values()
            .skip(request.offset())
            .take(request.size)
            .cloned()
            .collect();
        Page::new(content, request, books.len())
    }

    pub fn save(&self, book: Book) {
        self.books
            .write()
            .expect("books store poisoned")
            .insert(book.id, book);
    }
}

#[derive(Clone)]
pub struct BooksConsultationService {
    repository: BooksRepository,
}

impl BooksConsultationService {
    pub fn new(repository: BooksRepository) -> Self {
        Self { repository }
    }

    pub fn get_page(&self, request: PageRequest) -> Page<Book> {
        self.repository.find_page(request)
    }
}

#[derive(Clone)]
pub struct BooksReferencingService {
    repository: BooksRepository,
}

impl BooksReferencingService {
    pub fn new(repository: BooksRepository) -> Self {
        Self { repository }
    }

    pub fn reference_book(&self, command: ReferenceBook) -> Book {
        let book = Book {
            id: Uuid::new_v4(),
            authors: command.authors,
            original_language: command.original_language,
            details: command.details,
        };
        self.repository.save(book.clone());
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(language: &str, title: &str) -> LocalizedDetail {
        LocalizedDetail {
            language: language.to_string(),
            title: title.to_string(),
            description: format!("About {title}"),
        }
    }

    #[test]
    fn referencing_a_book_stores_and_returns_it() {
        let repository = BooksRepository::new();
        let referencing = BooksReferencingService::new(repository.clone());
        let consultation = BooksConsultationService::new(repository);

        let created = referencing.reference_book(ReferenceBook {
            authors: vec![Uuid::new_v4()],
            original_language: "en".to_string(),
            details: vec![detail("en", "Emma"), detail("fr", "Emma")],
        });

        let page = consultation.get_page(PageRequest::default());
        assert_eq!(page.content(), &[created]);
    }

    #[test]
    fn empty_store_lists_the_empty_page() {
        let consultation = BooksConsultationService::new(BooksRepository::new());
        assert_eq!(consultation.get_page(PageRequest::default()), Page::empty());
    }
}
