//! Referencing authors: command, model, repository and services

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use uuid::Uuid;

use crate::support::pagination::{Page, PageRequest};

/// Anything with a birth date and possibly a death date.
pub trait AliveOrDead {
    fn date_of_birth(&self) -> NaiveDate;

    fn date_of_death(&self) -> Option<NaiveDate>;

    fn is_born_before_dead(&self) -> bool {
        self.date_of_death()
            .map(|death| self.date_of_birth() < death)
            .unwrap_or(true)
    }
}

/// A referenced author, compared by identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl AliveOrDead for Author {
    fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    fn date_of_death(&self) -> Option<NaiveDate> {
        self.date_of_death
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReferenceAuthor {
    #[error("An author cannot have empty name")]
    EmptyName,
    #[error("An author cannot be dead before being born")]
    DeadBeforeBorn,
}

/// Command to reference a new author.
///
/// The name is trimmed; empty names and death-before-birth are rejected
/// here even when request validation is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAuthor {
    name: String,
    date_of_birth: NaiveDate,
    date_of_death: Option<NaiveDate>,
}

impl ReferenceAuthor {
    pub fn new(
        name: &str,
        date_of_birth: NaiveDate,
        date_of_death: Option<NaiveDate>,
    ) -> Result<Self, InvalidReferenceAuthor> {
        let command = Self {
            name: name.trim().to_string(),
            date_of_birth,
            date_of_death,
        };
        if command.name.is_empty() {
            return Err(InvalidReferenceAuthor::EmptyName);
        }
        if !command.is_born_before_dead() {
            return Err(InvalidReferenceAuthor::DeadBeforeBorn);
        }
        Ok(command)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AliveOrDead for ReferenceAuthor {
    fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    fn date_of_death(&self) -> Option<NaiveDate> {
        self.date_of_death
    }
}

/// Keyed by identifier, preserving insertion order for listing.
#[derive(Clone, Default)]
pub struct AuthorsRepository {
    authors: Arc<RwLock<IndexMap<Uuid, Author>>>,
}

impl AuthorsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_page(&self, request: PageRequest) -> Page<Author> {
        let authors = self.authors.read().expect("authors store poisoned");
        if authors.is_empty() {
            return Page::empty();
        }
        let content = authors
            .values()
            .skip(request.offset())
            .take(request.size)
            .cloned()
            .collect();
        Page::new(content, request, authors.len())
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Author> {
        self.authors
            .read()
            .expect("authors store poisoned")
            .get(&id)
            .cloned()
    }

    pub fn save(&self, author: Author) {
        self.authors
            .write()
            .expect("authors store poisoned")
            .insert(author.id, author);
    }
}

#[derive(Clone)]
pub struct AuthorsConsultationService {
    repository: AuthorsRepository,
}

impl AuthorsConsultationService {
    pub fn new(repository: AuthorsRepository) -> Self {
        Self { repository }
    }

    pub fn get_page(&self, request: PageRequest) -> Page<Author> {
        self.repository.find_page(request)
    }
}

#[derive(Clone)]
pub struct AuthorsReferencingService {
    repository: AuthorsRepository,
}

impl AuthorsReferencingService {
    pub fn new(repository: AuthorsRepository) -> Self {
        Self { repository }
    }

    pub fn reference_author(&self, command: ReferenceAuthor) -> Author {
        let author = Author {
            id: Uuid::new_v4(),
            name: command.name().to_string(),
            date_of_birth: command.date_of_birth(),
            date_of_death: command.date_of_death(),
        };
        self.repository.save(author.clone());
        author
    }
}
