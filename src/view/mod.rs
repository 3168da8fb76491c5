//! Dashboard state behind the sign-in gate.
//!
//! Holds only authoritative state: which panel is open, each panel's search
//! text, the selected sort option, and the description map. The lists shown
//! to the user are projected from the canonical collections on every render,
//! so they can never go stale relative to that state.

pub mod disclosure;
pub mod list;
pub mod sort;

use crate::models::{Product, SortOption, User};

pub use disclosure::Disclosure;
pub use list::{ListPanel, Searchable, filter_prefix};
pub use sort::{locale_compare, sort_products};

/// Panel identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Users,
    Products,
}

/// List view controller for both collections.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    users: ListPanel,
    products: ListPanel,
    sort: SortOption,
    disclosure: Disclosure,
}

impl Dashboard {
    pub fn new(sort: SortOption) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Toggle a panel. Opening one panel closes the other.
    ///
    /// Only the toggled panel's search text is reset.
    pub fn toggle(&mut self, panel: Panel) -> bool {
        let (target, other) = match panel {
            Panel::Users => (&mut self.users, &mut self.products),
            Panel::Products => (&mut self.products, &mut self.users),
        };
        let open = target.toggle();
        if open {
            other.close();
        }
        open
    }

    pub fn search(&mut self, panel: Panel, query: impl Into<String>) {
        self.panel_mut(panel).search(query);
    }

    pub fn select_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    pub fn toggle_description(&mut self, id: u64) -> bool {
        self.disclosure.toggle(id)
    }

    /// The open panel, if any.
    pub fn open_panel(&self) -> Option<Panel> {
        if self.users.is_open() {
            Some(Panel::Users)
        } else if self.products.is_open() {
            Some(Panel::Products)
        } else {
            None
        }
    }

    pub fn panel(&self, panel: Panel) -> &ListPanel {
        match panel {
            Panel::Users => &self.users,
            Panel::Products => &self.products,
        }
    }

    fn panel_mut(&mut self, panel: Panel) -> &mut ListPanel {
        match panel {
            Panel::Users => &mut self.users,
            Panel::Products => &mut self.products,
        }
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    /// Users view: canonical users under the users search text.
    pub fn user_view(&self, users: &[User]) -> Vec<User> {
        self.users.project(users)
    }

    /// Products view: filter first, then sort.
    pub fn product_view(&self, products: &[Product]) -> Vec<Product> {
        sort_products(&self.products.project(products), self.sort)
    }
}
