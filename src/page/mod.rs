//! The page: session gate in front of the dashboard.
//!
//! All state changes go through [`Page::dispatch`], one event at a time, each
//! running to completion. [`Page::view`] projects the current state into a
//! [`PageView`] that renderers consume; nothing derived is stored.

use serde::Serialize;

use crate::loader::{self, Catalogue, DataSource};
use crate::models::{Product, SortOption};
use crate::session::{CredentialVerifier, RosterVerifier, SessionGate};
use crate::view::{Dashboard, Panel};

/// A discrete UI event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Identifier input changed.
    InputId(String),
    /// Password input changed.
    InputPassword(String),
    /// Sign-in form submitted.
    Submit,
    TogglePanel(Panel),
    Search(Panel, String),
    SelectSort(SortOption),
    ToggleDescription(u64),
}

impl Event {
    /// Sign-in form events; only honoured while signed out.
    fn is_form_input(&self) -> bool {
        matches!(
            self,
            Event::InputId(_) | Event::InputPassword(_) | Event::Submit
        )
    }
}

/// Page state: canonical data, the gate, and the dashboard.
pub struct Page {
    catalogue: Catalogue,
    verifier: Box<dyn CredentialVerifier>,
    session: SessionGate,
    dashboard: Dashboard,
}

impl Page {
    /// Build a page that verifies sign-ins against the loaded users.
    pub fn new(catalogue: Catalogue, sort: SortOption) -> Self {
        let verifier = RosterVerifier::new(catalogue.users.clone());
        Self::with_verifier(catalogue, sort, Box::new(verifier))
    }

    /// Build a page with a custom credential check.
    pub fn with_verifier(
        catalogue: Catalogue,
        sort: SortOption,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            catalogue,
            verifier,
            session: SessionGate::new(),
            dashboard: Dashboard::new(sort),
        }
    }

    /// Load both resources once and build the page.
    ///
    /// Load failures are logged by the loader and leave the affected
    /// collection empty.
    pub async fn mount(source: &dyn DataSource, sort: SortOption) -> Self {
        let outcome = loader::load(source).await;
        Self::new(outcome.catalogue, sort)
    }

    /// Apply one event. Returns `false` when the event was ignored: dashboard
    /// events before sign-in, and sign-in form events after it.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let signed_in = self.session.is_authenticated();
        if event.is_form_input() == signed_in {
            tracing::debug!(?event, signed_in, "ignoring event for the hidden view");
            return false;
        }

        match event {
            Event::InputId(id) => self.session.set_id(id),
            Event::InputPassword(password) => self.session.set_password(password),
            Event::Submit => {
                self.session.submit(self.verifier.as_ref());
            }
            Event::TogglePanel(panel) => {
                self.dashboard.toggle(panel);
            }
            Event::Search(panel, query) => self.dashboard.search(panel, query),
            Event::SelectSort(sort) => self.dashboard.select_sort(sort),
            Event::ToggleDescription(id) => {
                self.dashboard.toggle_description(id);
            }
        }
        true
    }

    pub fn session(&self) -> &SessionGate {
        &self.session
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Project the current state for rendering.
    pub fn view(&self) -> PageView {
        if !self.session.is_authenticated() {
            return PageView::Login(LoginView {
                id: self.session.id().to_string(),
                password_len: self.session.password_len(),
                error_message: self.session.error_message().map(str::to_string),
            });
        }

        let users = self.dashboard.panel(Panel::Users);
        let products = self.dashboard.panel(Panel::Products);

        PageView::Dashboard(DashboardView {
            user_id: self.session.id().to_string(),
            users: users.is_open().then(|| UsersPanelView {
                query: users.query().to_string(),
                users: self
                    .dashboard
                    .user_view(&self.catalogue.users)
                    .into_iter()
                    .map(|u| UserRow { user_id: u.user_id })
                    .collect(),
            }),
            products: products.is_open().then(|| ProductsPanelView {
                query: products.query().to_string(),
                sort: self.dashboard.sort(),
                products: self
                    .dashboard
                    .product_view(&self.catalogue.products)
                    .into_iter()
                    .map(|p| self.product_row(p))
                    .collect(),
            }),
        })
    }

    fn product_row(&self, product: Product) -> ProductRow {
        let expanded = self.dashboard.disclosure().is_expanded(product.id);
        ProductRow {
            id: product.id,
            title: product.title,
            price: product.price,
            expanded,
            description: expanded.then_some(product.description),
            rating: expanded.then_some(product.rating),
        }
    }
}

/// What the user currently sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PageView {
    Login(LoginView),
    Dashboard(DashboardView),
}

/// Sign-in form. The password itself is never projected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginView {
    pub id: String,
    pub password_len: usize,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub user_id: String,
    pub users: Option<UsersPanelView>,
    pub products: Option<ProductsPanelView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsersPanelView {
    pub query: String,
    pub users: Vec<UserRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsPanelView {
    pub query: String,
    pub sort: SortOption,
    pub products: Vec<ProductRow>,
}

/// A product line. Description and rating are present only when expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn catalogue() -> Catalogue {
        Catalogue {
            users: vec![User::new("a", "1"), User::new("b", "2")],
            products: vec![Product {
                id: 1,
                title: "Lamp".to_string(),
                price: 30.0,
                description: "Warm light".to_string(),
                rating: 4.5,
            }],
        }
    }

    fn signed_in() -> Page {
        let mut page = Page::new(catalogue(), SortOption::Alphabet);
        page.dispatch(Event::InputId("a".into()));
        page.dispatch(Event::InputPassword("1".into()));
        page.dispatch(Event::Submit);
        page
    }

    fn dashboard(page: &Page) -> DashboardView {
        match page.view() {
            PageView::Dashboard(view) => view,
            PageView::Login(_) => panic!("expected dashboard"),
        }
    }

    #[test]
    fn dashboard_events_are_ignored_before_sign_in() {
        let mut page = Page::new(catalogue(), SortOption::Alphabet);
        assert!(!page.dispatch(Event::TogglePanel(Panel::Users)));
        assert_eq!(page.dashboard().open_panel(), None);
        assert!(matches!(page.view(), PageView::Login(_)));
    }

    #[test]
    fn form_events_are_ignored_after_sign_in() {
        let mut page = signed_in();
        assert!(!page.dispatch(Event::InputId("b".into())));
        assert!(!page.dispatch(Event::InputPassword("2".into())));
        assert!(!page.dispatch(Event::Submit));
        assert_eq!(dashboard(&page).user_id, "a");
    }

    #[test]
    fn login_view_masks_password() {
        let mut page = Page::new(catalogue(), SortOption::Alphabet);
        page.dispatch(Event::InputPassword("secret".into()));
        match page.view() {
            PageView::Login(view) => assert_eq!(view.password_len, 6),
            PageView::Dashboard(_) => panic!("expected login"),
        }
    }

    #[test]
    fn closed_panels_project_nothing() {
        let view = dashboard(&signed_in());
        assert_eq!(view.user_id, "a");
        assert!(view.users.is_none());
        assert!(view.products.is_none());
    }

    #[test]
    fn expanded_rows_carry_description_and_rating() {
        let mut page = signed_in();
        page.dispatch(Event::TogglePanel(Panel::Products));
        page.dispatch(Event::ToggleDescription(1));
        let row = &dashboard(&page).products.unwrap().products[0];
        assert!(row.expanded);
        assert_eq!(row.description.as_deref(), Some("Warm light"));
        assert_eq!(row.rating, Some(4.5));
    }

    #[test]
    fn collapsed_rows_hide_description() {
        let mut page = signed_in();
        page.dispatch(Event::TogglePanel(Panel::Products));
        let row = &dashboard(&page).products.unwrap().products[0];
        assert!(!row.expanded);
        assert_eq!(row.description, None);
        assert_eq!(row.rating, None);
    }

    struct AcceptAll;

    impl CredentialVerifier for AcceptAll {
        fn verify(&self, _id: &str, _password: &str) -> bool {
            true
        }
    }

    #[test]
    fn custom_verifier_replaces_roster() {
        let mut page = Page::with_verifier(Catalogue::default(), SortOption::Alphabet, Box::new(AcceptAll));
        page.dispatch(Event::InputId("anyone".into()));
        page.dispatch(Event::Submit);
        assert!(page.session().is_authenticated());
    }
}
