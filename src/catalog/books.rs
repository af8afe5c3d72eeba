//! Catalog books: localized details, repository and services

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::support::pagination::{Page, PageRequest};

use super::authors::Author;

pub const WIKIPEDIA_LINK: &str = "wikipedia";

/// A link to an external resource describing a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub source: String,
    pub value: String,
}

impl ExternalLink {
    pub fn is_wikipedia_link(&self) -> bool {
        self.source == WIKIPEDIA_LINK
    }
}

/// The title, description and links of a book in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedDetails {
    pub language: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
}

/// A book of the catalog, compared by identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub authors: Vec<Author>,
    pub original_language: String,
    pub details: Vec<LocalizedDetails>,
}

impl Book {
    pub fn accepts_language(&self, language: &str) -> bool {
        self.details.iter().any(|detail| detail.language == language)
    }

    pub fn details_in(&self, language: &str) -> Option<&LocalizedDetails> {
        self.details.iter().find(|detail| detail.language == language)
    }

    pub fn title_in(&self, language: &str) -> Option<&str> {
        self.details_in(language).map(|detail| detail.title.as_str())
    }

    pub fn description_in(&self, language: &str) -> Option<&str> {
        self.details_in(language)
            .map(|detail| detail.description.as_str())
    }

    pub fn wikipedia_link_in(&self, language: &str) -> Option<&ExternalLink> {
        self.details_in(language)?
            .links
            .iter()
            .find(|link| link.is_wikipedia_link())
    }

    /// Details in the requested language, falling back to the book's
    /// original language.
    pub fn localized(&self, language: &str) -> Option<&LocalizedDetails> {
        self.details_in(language)
            .or_else(|| self.details_in(&self.original_language))
            .or_else(|| self.details.first())
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, request: PageRequest) -> Page<Book> {
        let books = self.books.read().expect("books store poisoned");
        Page::from_slice(&books, request)
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Book> {
        self.books
            .read()
            .expect("books store poisoned")
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    pub fn find_notable_by_author(&self, author_id: Uuid) -> Vec<Book> {
        self.books
            .read()
            .expect("books store poisoned")
            .iter()
            .filter(|book| book.authors.iter().any(|author| author.id == author_id))
            .cloned()
            .collect()
    }

    pub fn find_all(&self) -> Vec<Book> {
        self.books.read().expect("books store poisoned").clone()
    }

    pub fn save_all(&self, books: Vec<Book>) {
        self.books
            .write()
            .expect("books store poisoned")
            .extend(books);
    }
}

#[derive(Clone)]
pub struct BooksService {
    repository: BooksRepository,
}

impl BooksService {
    pub fn new(repository: BooksRepository) -> Self {
        Self { repository }
    }

    pub fn get_book(&self, id: Uuid) -> Option<Book> {
        self.repository.find_by_id(id)
    }

    pub fn get_notable_books(&self, author_id: Uuid) -> Vec<Book> {
        self.repository.find_notable_by_author(author_id)
    }
}

/// Paged consultation of the whole books catalog.
#[derive(Clone)]
pub struct CatalogService {
    repository: BooksRepository,
}

impl CatalogService {
    pub fn new(repository: BooksRepository) -> Self {
        Self { repository }
    }

    pub fn get_page(&self, request: PageRequest) -> Page<Book> {
        self.repository.find(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn author(name: &str) -> Author {
        Author {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1800, 1, 1).unwrap(),
            date_of_death: None,
        }
    }

    fn book(title: &str, language: &str, authors: Vec<Author>) -> Book {
        Book {
            id: Uuid::new_v4(),
            authors,
            original_language: language.to_string(),
            details: vec![LocalizedDetails {
                language: language.to_string(),
                title: title.to_string(),
                description: format!("About {title}"),
                links: vec![],
            }],
        }
    }

    #[test]
    fn localized_falls_back_to_original_language() {
        let book = book("Notre-Dame de Paris", "fr", vec![author("Victor Hugo")]);
        assert!(book.accepts_language("fr"));
        assert!(!book.accepts_language("en"));
        assert_eq!(book.title_in("en"), None);
        assert_eq!(
            book.localized("en").map(|d| d.title.as_str()),
            Some("Notre-Dame de Paris")
        );
    }

    #[test]
    fn wikipedia_link_is_found_by_source() {
        let mut book = book("Emma", "en", vec![author("Jane Austen")]);
        book.details[0].links = vec![
            ExternalLink {
                source: "publisher".to_string(),
                value: "https://example.com/emma".to_string(),
            },
            ExternalLink {
                source: WIKIPEDIA_LINK.to_string(),
                value: "https://en.wikipedia.org/wiki/Emma_(novel)".to_string(),
            },
        ];
        let link = book.wikipedia_link_in("en").unwrap();
        assert!(link.is_wikipedia_link());
        assert_eq!(link.value, "https://en.wikipedia.org/wiki/Emma_(novel)");
    }

    #[test]
    fn page_slices_in_insertion_order() {
        let repository = BooksRepository::new();
        let books: Vec<_> = (0..5)
            .map(|i| book(&format!("Book {i}"), "en", vec![]))
            .collect();
        repository.save_all(books.clone());

        let service = CatalogService::new(repository);
        let page = service.get_page(PageRequest::of(1, 2));
        assert_eq!(page.content(), &books[2..4]);
        assert_eq!(page.metadata().total_elements, 5);
        assert_eq!(page.metadata().total_pages, 3);
    }

    #[test]
    fn empty_catalog_yields_empty_page() {
        let service = CatalogService::new(BooksRepository::new());
        let page = service.get_page(PageRequest::default());
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn notable_books_are_those_authored() {
        let austen = author("Jane Austen");
        let hugo = author("Victor Hugo");
        let repository = BooksRepository::new();
        let emma = book("Emma", "en", vec![austen.clone()]);
        let persuasion = book("Persuasion", "en", vec![austen.clone()]);
        let miserables = book("Les Misérables", "fr", vec![hugo.clone()]);
        repository.save_all(vec![emma.clone(), persuasion.clone(), miserables]);

        let service = BooksService::new(repository);
        assert_eq!(
            service.get_notable_books(austen.id),
            vec![emma, persuasion]
        );
        assert_eq!(service.get_notable_books(Uuid::new_v4()), vec![]);
    }
}
