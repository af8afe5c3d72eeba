//! Catalog editions: model, repository and lookup service

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::authors::Author;

/// A publication date known either exactly or by year only.
///
/// Serialized as its string form (`1813-01-28` or `1813`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationDate {
    Exact(chrono::NaiveDate),
    Year(i32),
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationDate::Exact(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            PublicationDate::Year(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is neither a date nor a year")]
pub struct InvalidPublicationDate(String);

impl FromStr for PublicationDate {
    type Err = InvalidPublicationDate;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(PublicationDate::Exact(date));
        }
        value
            .parse::<i32>()
            .map(PublicationDate::Year)
            .map_err(|_| InvalidPublicationDate(value.to_string()))
    }
}

impl Serialize for PublicationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PublicationDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: Uuid,
    pub name: String,
}

/// An edition of a book, compared by ISBN only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edition {
    pub isbn: String,
    pub book_id: Uuid,
    pub title: String,
    pub publication_date: PublicationDate,
    pub publisher: Option<Publisher>,
    pub authors: Vec<Author>,
    pub language: String,
    pub summary: String,
}

impl PartialEq for Edition {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Edition {}

#[derive(Clone, Default)]
pub struct EditionsRepository {
    editions: Arc<RwLock<Vec<Edition>>>,
}

impl EditionsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<Edition> {
        self.editions
            .read()
            .expect("editions store poisoned")
            .iter()
            .find(|edition| edition.isbn == isbn)
            .cloned()
    }

    pub fn find_by_book_id(&self, book_id: Uuid) -> Vec<Edition> {
        self.editions
            .read()
            .expect("editions store poisoned")
            .iter()
            .filter(|edition| edition.book_id == book_id)
            .cloned()
            .collect()
    }

    pub fn find_by_book_ids(&self, book_ids: &[Uuid]) -> Vec<Edition> {
        self.editions
            .read()
            .expect("editions store poisoned")
            .iter()
            .filter(|edition| book_ids.contains(&edition.book_id))
            .cloned()
            .collect()
    }

    pub fn find_all(&self) -> Vec<Edition> {
        self.editions
            .read()
            .expect("editions store poisoned")
            .clone()
    }

    pub fn save_all(&self, editions: Vec<Edition>) {
        self.editions
            .write()
            .expect("editions store poisoned")
            .extend(editions);
    }
}

#[derive(Clone)]
pub struct EditionsService {
    repository: EditionsRepository,
}

impl EditionsService {
    pub fn new(repository: EditionsRepository) -> Self {
        Self { repository }
    }

    pub fn get_edition(&self, isbn: &str) -> Option<Edition> {
        self.repository.find_by_isbn(isbn)
    }

    pub fn get_book_editions(&self, book_id: Uuid) -> Vec<Edition> {
        self.repository.find_by_book_id(book_id)
    }

    pub fn get_books_editions(&self, book_ids: &[Uuid]) -> Vec<Edition> {
        self.repository.find_by_book_ids(book_ids)
    }
}
