//! Collapsible, searchable list panels.

use crate::models::{Product, User};

/// Items that can be narrowed by a prefix search.
pub trait Searchable {
    /// The field the search query is matched against.
    fn search_key(&self) -> &str;
}

impl Searchable for User {
    fn search_key(&self) -> &str {
        &self.user_id
    }
}

impl Searchable for Product {
    fn search_key(&self) -> &str {
        &self.title
    }
}

/// Keep items whose search key starts with `query`, ignoring case.
///
/// Canonical order is preserved and an empty query keeps everything.
pub fn filter_prefix<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.search_key().to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}

/// Visibility and search text for one panel. The filtered list itself is
/// never stored; it is projected from the canonical collection on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPanel {
    open: bool,
    query: String,
}

impl ListPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Flip visibility and clear the search text.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.query.clear();
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current view of `items` under this panel's search text.
    pub fn project<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        filter_prefix(items, &self.query)
    }
}
