//! Per-product description visibility.

use indexmap::IndexMap;

/// Maps product id to "description expanded?".
///
/// Entries are created on first toggle. An absent entry means hidden, so the
/// first toggle of any id always reveals it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: IndexMap<u64, bool>,
}

impl Disclosure {
    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    /// Flip visibility for `id` and return the new value.
    pub fn toggle(&mut self, id: u64) -> bool {
        let entry = self.expanded.entry(id).or_insert(false);
        *entry = !*entry;
        *entry
    }
}
