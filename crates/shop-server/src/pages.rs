//! In-memory store for statically generated pages.
//!
//! A page is generated once, served from memory, and regenerated after
//! its revalidation window expires. Expired pages keep being served
//! while a replacement is generated in the background, and at most one
//! regeneration per product runs at a time. Generation of different
//! products never blocks each other.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, RwLock};
use std::time::{Duration, Instant};

use shop_core::ProductView;

/// A generated page together with the view model it was rendered from.
#[derive(Clone, Debug)]
pub struct StaticPage {
    pub view: ProductView,
    pub html: String,
    generated_at: Instant,
}

impl StaticPage {
    pub fn new(view: ProductView, html: String) -> Self {
        Self {
            view,
            html,
            generated_at: Instant::now(),
        }
    }

    fn age(&self) -> Duration {
        self.generated_at.elapsed()
    }
}

/// Result of a page lookup.
#[derive(Debug)]
pub enum PageLookup {
    /// Generated within the revalidation window; serve as-is.
    Fresh(String),
    /// Past the window; serve it, but trigger a regeneration.
    Stale(String),
    /// Never generated; the caller must generate before responding.
    Miss,
}

/// Store for generated pages with revalidation bookkeeping.
pub struct PageStore {
    revalidate: Duration,
    pages: RwLock<HashMap<String, StaticPage>>,
    revalidating: Mutex<HashSet<String>>,
}

impl PageStore {
    pub fn new(revalidate: Duration) -> Self {
        Self {
            revalidate,
            pages: RwLock::new(HashMap::new()),
            revalidating: Mutex::new(HashSet::new()),
        }
    }

    /// Look up the stored page for a product id.
    pub fn lookup(&self, id: &str) -> PageLookup {
        let pages = self.pages.read().unwrap();

        match pages.get(id) {
            Some(page) if page.age() < self.revalidate => PageLookup::Fresh(page.html.clone()),
            Some(page) => PageLookup::Stale(page.html.clone()),
            None => PageLookup::Miss,
        }
    }

    /// Store a freshly generated page, replacing any previous one.
    pub fn insert(&self, id: impl Into<String>, page: StaticPage) {
        self.pages.write().unwrap().insert(id.into(), page);
    }

    /// Number of pages currently stored.
    pub fn len(&self) -> usize {
        self.pages.read().unwrap().len()
    }

    /// Claim the regeneration slot for a product.
    ///
    /// Returns false when a regeneration for this id is already running;
    /// the caller must not start another one.
    pub fn try_begin_revalidate(&self, id: &str) -> bool {
        self.revalidating.lock().unwrap().insert(id.to_string())
    }

    /// Release the slot claimed by `try_begin_revalidate`.
    pub fn finish_revalidate(&self, id: &str) {
        self.revalidating.lock().unwrap().remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str) -> StaticPage {
        let view = ProductView::new("prod_1", name, vec![], None, "price_1", 100);
        StaticPage::new(view, format!("<html>{name}</html>"))
    }

    #[test]
    fn test_missing_page_is_a_miss() {
        let store = PageStore::new(Duration::from_secs(3600));
        assert!(matches!(store.lookup("prod_1"), PageLookup::Miss));
    }

    #[test]
    fn test_recent_page_is_fresh() {
        let store = PageStore::new(Duration::from_secs(3600));
        store.insert("prod_1", page("Caneca"));

        match store.lookup("prod_1") {
            PageLookup::Fresh(html) => assert!(html.contains("Caneca")),
            other => panic!("expected fresh page, got {other:?}"),
        }
    }

    #[test]
    fn test_expired_page_is_served_stale() {
        // Zero window: everything is expired the moment it is stored.
        let store = PageStore::new(Duration::ZERO);
        store.insert("prod_1", page("Caneca"));

        match store.lookup("prod_1") {
            PageLookup::Stale(html) => assert!(html.contains("Caneca")),
            other => panic!("expected stale page, got {other:?}"),
        }
    }

    #[test]
    fn test_insert_replaces_previous_page() {
        let store = PageStore::new(Duration::from_secs(3600));
        store.insert("prod_1", page("Caneca"));
        store.insert("prod_1", page("Camiseta"));

        assert_eq!(store.len(), 1);
        match store.lookup("prod_1") {
            PageLookup::Fresh(html) => assert!(html.contains("Camiseta")),
            other => panic!("expected fresh page, got {other:?}"),
        }
    }

    #[test]
    fn test_revalidation_slot_is_exclusive_per_id() {
        let store = PageStore::new(Duration::ZERO);

        assert!(store.try_begin_revalidate("prod_1"));
        assert!(!store.try_begin_revalidate("prod_1"));

        // A different product regenerates independently.
        assert!(store.try_begin_revalidate("prod_2"));

        store.finish_revalidate("prod_1");
        assert!(store.try_begin_revalidate("prod_1"));
    }
}
