//! Catalog authors: model, in-memory repository and lookup service

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// An author of the catalog, compared and hashed by identifier only.
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

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Clone, Default)]
pub struct AuthorsRepository {
    authors: Arc<RwLock<Vec<Author>>>,
}

impl AuthorsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Author> {
        self.authors
            .read()
            .expect("authors store poisoned")
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    pub fn find_all(&self) -> Vec<Author> {
        self.authors
            .read()
            .expect("authors store poisoned")
            .clone()
    }

    pub fn save_all(&self, authors: Vec<Author>) {
        self.authors
            .write()
            .expect("authors store poisoned")
            .extend(authors);
    }
}

#[derive(Clone)]
pub struct AuthorsService {
    repository: AuthorsRepository,
}

impl AuthorsService {
    pub fn new(repository: AuthorsRepository) -> Self {
        Self { repository }
    }

    pub fn get_author(&self, id: Uuid) -> Option<Author> {
        self.repository.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane_austen() -> Author {
        Author {
            id: Uuid::new_v4(),
            name: "Jane Austen".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1775, 12, 16).unwrap(),
            date_of_death: Some(NaiveDate::from_ymd_opt(1817, 7, 18).unwrap()),
        }
    }

    #[test]
    fn authors_compare_by_id_only() {
        let author = jane_austen();
        let mut renamed = author.clone();
        renamed.name = "J. Austen".to_string();
        assert_eq!(author, renamed);
    }

    #[test]
    fn finds_saved_author_by_id() {
        let repository = AuthorsRepository::new();
        let author = jane_austen();
        repository.save_all(vec![author.clone()]);

        let service = AuthorsService::new(repository);
        assert_eq!(service.get_author(author.id), Some(author));
    }

    #[test]
    fn unknown_id_yields_none() {
        let service = AuthorsService::new(AuthorsRepository::new());
        assert_eq!(service.get_author(Uuid::new_v4()), None);
    }
}
