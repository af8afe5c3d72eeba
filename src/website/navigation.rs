//! Navigable pages and the per-session current-page slot

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::catalog_client::Book;

/// A named navigation link of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub name: String,
    pub href: String,
}

/// A page of content together with its navigation links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigablePage<T> {
    content: Vec<T>,
    number: usize,
    size: usize,
    total_elements: usize,
    total_pages: usize,
    links: Vec<PageLink>,
}

impl<T> NavigablePage<T> {
    pub fn new(
        content: Vec<T>,
        number: usize,
        size: usize,
        total_elements: usize,
        total_pages: usize,
        links: Vec<PageLink>,
    ) -> Self {
        Self {
            content,
            number,
            size,
            total_elements,
            total_pages,
            links,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_link(&self, name: &str) -> bool {
        debug_assert!(!name.trim().is_empty(), "Link name must be set");
        self.links.iter().any(|link| link.name == name)
    }

    pub fn link(&self, name: &str) -> Option<&str> {
        debug_assert!(!name.trim().is_empty(), "Link name must be set");
        self.links
            .iter()
            .find(|link| link.name == name)
            .map(|link| link.href.as_str())
    }
}

struct Slot {
    page: NavigablePage<Book>,
    touched: Instant,
}

/// Per-session single-slot cache of the current navigable page.
///
/// Sessions are keyed by a cookie-carried token; stale slots are swept
/// on access once their TTL elapses.
pub struct NavigationSessions {
    ttl: Duration,
    sessions: Mutex<HashMap<Uuid, Slot>>,
}

impl NavigationSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn current_page(&self, session: Uuid) -> Option<NavigablePage<Book>> {
        let mut sessions = self.sessions.lock().expect("navigation sessions poisoned");
        let ttl = self.ttl;
        sessions.retain(|_, slot| slot.touched.elapsed() < ttl);
        sessions.get_mut(&session).map(|slot| {
            slot.touched = Instant::now();
            slot.page.clone()
        })
    }

    pub fn switch_page(&self, session: Uuid, page: NavigablePage<Book>) {
        let mut sessions = self.sessions.lock().expect("navigation sessions poisoned");
        sessions.insert(
            session,
            Slot {
                page,
                touched: Instant::now(),
            },
        );
    }

    pub fn clear_current_page(&self, session: Uuid) {
        let mut sessions = self.sessions.lock().expect("navigation sessions poisoned");
        sessions.remove(&session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize) -> NavigablePage<Book> {
        NavigablePage::new(vec![], number, 10, 0, 0, vec![])
    }

    #[test]
    fn switching_replaces_the_single_slot() {
        let sessions = NavigationSessions::new(Duration::from_secs(60));
        let token = Uuid::new_v4();
        sessions.switch_page(token, page(0));
        sessions.switch_page(token, page(3));
        assert_eq!(sessions.current_page(token).unwrap().number(), 3);
    }

    #[test]
    fn cleared_session_has_no_current_page() {
        let sessions = NavigationSessions::new(Duration::from_secs(60));
        let token = Uuid::new_v4();
        sessions.switch_page(token, page(1));
        sessions.clear_current_page(token);
        assert!(sessions.current_page(token).is_none());
    }

    #[test]
    fn sessions_are_isolated_by_token() {
        let sessions = NavigationSessions::new(Duration::from_secs(60));
        let first = Uuid::new_v4();
        sessions.switch_page(first, page(1));
        assert!(sessions.current_page(Uuid::new_v4()).is_none());
        assert!(sessions.current_page(first).is_some());
    }

    #[test]
    fn expired_slots_are_swept() {
        let sessions = NavigationSessions::new(Duration::ZERO);
        let token = Uuid::new_v4();
        sessions.switch_page(token, page(1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(sessions.current_page(token).is_none());
    }

    #[test]
    fn page_links_are_found_by_name() {
        let page = NavigablePage::new(
            vec![String::from("content")],
            0,
            10,
            1,
            1,
            vec![PageLink {
                name: "next".to_string(),
                href: "/api/v1/catalog?page=1&size=10".to_string(),
            }],
        );
        assert!(page.has_link("next"));
        assert!(!page.has_link("prev"));
        assert_eq!(page.link("next"), Some("/api/v1/catalog?page=1&size=10"));
        assert_eq!(page.link("prev"), None);
    }
}
