//! Seed data loading for the catalog's in-memory repositories

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use thiserror::Error;
use uuid::Uuid;

use crate::config::AutoLoadConfig;

use super::authors::{Author, AuthorsRepository};
use super::books::{Book, ExternalLink, LocalizedDetails};
use super::editions::{Edition, PublicationDate, Publisher};
use super::CatalogRepositories;

#[derive(Debug, Error)]
pub enum AutoLoadError {
    #[error("Unable to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Unable to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid seed data: {0}")]
    Invalid(String),
}

/// Load authors, books then editions into the repositories.
///
/// Books resolve author ids and editions resolve book ids, so the load
/// order matters and any dangling reference aborts the startup.
pub fn load_catalog(
    repositories: &CatalogRepositories,
    config: &AutoLoadConfig,
) -> Result<(), AutoLoadError> {
    load_authors(&repositories.authors, &config.authors)?;
    load_books(repositories, &config.books)?;
    load_editions(repositories, &config.editions)?;
    Ok(())
}

fn load_authors(repository: &AuthorsRepository, path: &str) -> Result<(), AutoLoadError> {
    let entries: Vec<AuthorEntry> = parse_file(path)?;
    let authors = entries
        .into_iter()
        .map(AuthorEntry::convert)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Loaded {} authors", authors.len());
    tracing::debug!("Authors: {authors:?}");
    repository.save_all(authors);
    Ok(())
}

fn load_books(repositories: &CatalogRepositories, path: &str) -> Result<(), AutoLoadError> {
    let entries: Vec<BookEntry> = parse_file(path)?;
    let books = entries
        .into_iter()
        .map(|entry| entry.convert(&repositories.authors))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Loaded {} books", books.len());
    repositories.books.save_all(books);
    Ok(())
}

fn load_editions(repositories: &CatalogRepositories, path: &str) -> Result<(), AutoLoadError> {
    let entries: Vec<EditionEntry> = parse_file(path)?;
    let editions = entries
        .into_iter()
        .map(|entry| entry.convert(repositories))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Loaded {} editions", editions.len());
    repositories.editions.save_all(editions);
    Ok(())
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, AutoLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| AutoLoadError::Read {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AutoLoadError::Parse {
        path: path.to_string(),
        source,
    })
}

#[derive(Debug, Deserialize)]
struct AuthorEntry {
    id: Uuid,
    name: String,
    date_of_birth: NaiveDate,
    date_of_death: Option<NaiveDate>,
}

impl AuthorEntry {
    fn convert(self) -> Result<Author, AutoLoadError> {
        if self.name.trim().is_empty() {
            return Err(AutoLoadError::Invalid(format!(
                "Author {} name cannot be empty",
                self.id
            )));
        }
        if let Some(date_of_death) = self.date_of_death {
            if date_of_death < self.date_of_birth {
                return Err(AutoLoadError::Invalid(format!(
                    "Author {} cannot be dead before being born",
                    self.id
                )));
            }
        }
        Ok(Author {
            id: self.id,
            name: self.name,
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
        })
    }
}

#[derive(Debug, Deserialize)]
struct BookEntry {
    id: Uuid,
    authors: Vec<Uuid>,
    original_language: String,
    details: Vec<DetailsEntry>,
}

#[derive(Debug, Deserialize)]
struct DetailsEntry {
    language: String,
    title: String,
    description: String,
    #[serde(default)]
    links: Vec<LinkEntry>,
}

#[derive(Debug, Deserialize)]
struct LinkEntry {
    source: String,
    value: String,
}

impl BookEntry {
    fn convert(self, authors: &AuthorsRepository) -> Result<Book, AutoLoadError> {
        let resolved = self
            .authors
            .iter()
            .map(|author_id| {
                authors.find_by_id(*author_id).ok_or_else(|| {
                    AutoLoadError::Invalid(format!(
                        "Book {} references unknown author {author_id}",
                        self.id
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let details: Vec<_> = self
            .details
            .into_iter()
            .map(|detail| LocalizedDetails {
                language: detail.language,
                title: detail.title,
                description: detail.description,
                links: detail
                    .links
                    .into_iter()
                    .map(|link| ExternalLink {
                        source: link.source,
                        value: link.value,
                    })
                    .collect(),
            })
            .collect();
        if !details
            .iter()
            .any(|detail| detail.language == self.original_language)
        {
            return Err(AutoLoadError::Invalid(format!(
                "Book {} has no details in its original language '{}'",
                self.id, self.original_language
            )));
        }
        Ok(Book {
            id: self.id,
            authors: resolved,
            original_language: self.original_language,
            details,
        })
    }
}

#[derive(Debug, Deserialize)]
struct EditionEntry {
    isbn: String,
    book_id: Uuid,
    title: String,
    publication_date: PublicationDate,
    publisher: Option<PublisherEntry>,
    authors: Vec<Uuid>,
    language: String,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct PublisherEntry {
    id: Uuid,
    name: String,
}

impl EditionEntry {
    fn convert(self, repositories: &CatalogRepositories) -> Result<Edition, AutoLoadError> {
        if repositories.books.find_by_id(self.book_id).is_none() {
            return Err(AutoLoadError::Invalid(format!(
                "Edition {} references unknown book {}",
                self.isbn, self.book_id
            )));
        }
        let authors = self
            .authors
            .iter()
            .map(|author_id| {
                repositories.authors.find_by_id(*author_id).ok_or_else(|| {
                    AutoLoadError::Invalid(format!(
                        "Edition {} references unknown author {author_id}",
                        self.isbn
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Edition {
            isbn: self.isbn,
            book_id: self.book_id,
            title: self.title,
            publication_date: self.publication_date,
            publisher: self.publisher.map(|publisher| Publisher {
                id: publisher.id,
                name: publisher.name,
            }),
            authors,
            language: self.language,
            summary: self.summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_author_dead_before_born() {
        let entry: AuthorEntry = serde_json::from_value(serde_json::json!({
            "id": "a5c8f0ee-1f5f-4b3c-9e5d-6f1f3c8b9d3e",
            "name": "Impossible",
            "date_of_birth": "1900-01-01",
            "date_of_death": "1850-01-01"
        }))
        .unwrap();
        assert!(matches!(entry.convert(), Err(AutoLoadError::Invalid(_))));
    }

    #[test]
    fn rejects_blank_author_name() {
        let entry: AuthorEntry = serde_json::from_value(serde_json::json!({
            "id": "a5c8f0ee-1f5f-4b3c-9e5d-6f1f3c8b9d3e",
            "name": "  ",
            "date_of_birth": "1900-01-01"
        }))
        .unwrap();
        assert!(matches!(entry.convert(), Err(AutoLoadError::Invalid(_))));
    }

    #[test]
    fn book_requires_details_in_original_language() {
        let repositories = CatalogRepositories::new();
        let entry: BookEntry = serde_json::from_value(serde_json::json!({
            "id": "7a0c9f0a-41be-4bb9-b0ed-32cbaca29b1a",
            "authors": [],
            "original_language": "fr",
            "details": [
                {"language": "en", "title": "The Stranger", "description": "A novel."}
            ]
        }))
        .unwrap();
        assert!(matches!(
            entry.convert(&repositories.authors),
            Err(AutoLoadError::Invalid(_))
        ));
    }

    #[test]
    fn book_rejects_unknown_author_reference() {
        let repositories = CatalogRepositories::new();
        let entry: BookEntry = serde_json::from_value(serde_json::json!({
            "id": "7a0c9f0a-41be-4bb9-b0ed-32cbaca29b1a",
            "authors": ["1343c586-81a2-4cb2-b322-985a12c0d5e9"],
            "original_language": "en",
            "details": [
                {"language": "en", "title": "Emma", "description": "A novel."}
            ]
        }))
        .unwrap();
        assert!(matches!(
            entry.convert(&repositories.authors),
            Err(AutoLoadError::Invalid(_))
        ));
    }
}
