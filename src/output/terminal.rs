//! Terminal renderer: the page as styled flowing text.

use colored::Colorize;

use crate::constants::{
    COPYRIGHT, FEATURES_ROUTE, LOGIN_PROMPT, NO_PRODUCTS, NO_USERS, REPOSITORY_URL,
};
use crate::output::PageRenderer;
use crate::page::{DashboardView, LoginView, PageView, ProductRow, ProductsPanelView, UsersPanelView};

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl PageRenderer for TerminalRenderer {
    fn render(&self, view: &PageView) -> String {
        let mut output = String::new();
        match view {
            PageView::Login(login) => render_login(&mut output, login),
            PageView::Dashboard(dashboard) => render_dashboard(&mut output, dashboard),
        }
        render_footer(&mut output);
        output
    }
}

fn render_login(output: &mut String, login: &LoginView) {
    output.push_str(&format!("  {}\n", LOGIN_PROMPT.bold()));
    output.push_str(&format!("  {}       {}\n", "ID:".cyan(), login.id));
    output.push_str(&format!(
        "  {} {}\n",
        "Password:".cyan(),
        "*".repeat(login.password_len)
    ));
    output.push_str(&format!("  {}\n", "[Sign In]".dimmed()));
    if let Some(ref message) = login.error_message {
        output.push_str(&format!("  {} {}\n", "✖".red().bold(), message.red()));
    }
}

fn render_dashboard(output: &mut String, dashboard: &DashboardView) {
    output.push_str(&format!(
        "  {}\n",
        format!("Welcome, {}!", dashboard.user_id).bold()
    ));

    let users_button = if dashboard.users.is_some() { "Hide Users" } else { "Show Users" };
    let products_button = if dashboard.products.is_some() {
        "Hide Products"
    } else {
        "Show Products"
    };
    output.push_str(&format!(
        "  [{}] [{}]\n",
        users_button.cyan(),
        products_button.cyan()
    ));

    if let Some(ref users) = dashboard.users {
        render_users(output, users);
    }
    if let Some(ref products) = dashboard.products {
        render_products(output, products);
    }
}

fn render_users(output: &mut String, panel: &UsersPanelView) {
    output.push('\n');
    output.push_str(&format!("  {} {}\n", "Search:".dimmed(), panel.query));

    if panel.users.is_empty() {
        output.push_str(&format!("  {}\n", NO_USERS.yellow()));
        return;
    }
    for user in &panel.users {
        output.push_str(&format!("  User: {}\n", user.user_id.bold()));
    }
}

fn render_products(output: &mut String, panel: &ProductsPanelView) {
    output.push('\n');
    output.push_str(&format!("  {} {}\n", "Search:".dimmed(), panel.query));
    output.push_str(&format!("  {} {}\n", "Sort:".dimmed(), panel.sort.label()));

    if panel.products.is_empty() {
        output.push_str(&format!("  {}\n", NO_PRODUCTS.yellow()));
        return;
    }
    for product in &panel.products {
        render_product(output, product);
    }
}

fn render_product(output: &mut String, product: &ProductRow) {
    let button = if product.expanded {
        "Hide Description"
    } else {
        "Show Description"
    };
    output.push('\n');
    output.push_str(&format!(
        "  {} Product: {}\n",
        format!("#{}", product.id).dimmed(),
        product.title.bold()
    ));
    output.push_str(&format!("     Price: {}  [{}]\n", product.price, button.cyan()));
    if let Some(ref description) = product.description {
        output.push_str(&format!("     Description: {description}\n"));
    }
    if let Some(rating) = product.rating {
        output.push_str(&format!("     Rating: {rating}\n"));
    }
}

fn render_footer(output: &mut String) {
    output.push_str(&format!("\n{}\n", "───────────────────────────────────".dimmed()));
    output.push_str(&format!(
        " GITHUB: {} {}\n",
        REPOSITORY_URL.bold(),
        COPYRIGHT.dimmed()
    ));
    output.push_str(&format!(" Features → {}\n", FEATURES_ROUTE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOption;
    use crate::page::UserRow;

    fn dashboard(users: Option<UsersPanelView>, products: Option<ProductsPanelView>) -> PageView {
        PageView::Dashboard(DashboardView {
            user_id: "alice".into(),
            users,
            products,
        })
    }

    #[test]
    fn render_login_with_error() {
        let output = TerminalRenderer.render(&PageView::Login(LoginView {
            id: "alice".into(),
            password_len: 4,
            error_message: Some("Wrong ID or Password!".into()),
        }));
        assert!(output.contains("Please Sign in!"));
        assert!(output.contains("****"));
        assert!(output.contains("Wrong ID or Password!"));
        assert!(output.contains("https://github.com/paicit0/board"));
    }

    #[test]
    fn render_login_never_shows_password_text() {
        let output = TerminalRenderer.render(&PageView::Login(LoginView {
            id: String::new(),
            password_len: 0,
            error_message: None,
        }));
        assert!(!output.contains("Wrong ID"));
    }

    #[test]
    fn render_users_panel() {
        let output = TerminalRenderer.render(&dashboard(
            Some(UsersPanelView {
                query: "b".into(),
                users: vec![UserRow { user_id: "bob".into() }],
            }),
            None,
        ));
        assert!(output.contains("Welcome, alice!"));
        assert!(output.contains("Hide Users"));
        assert!(output.contains("Show Products"));
        assert!(output.contains("bob"));
    }

    #[test]
    fn render_empty_panels() {
        let users = TerminalRenderer.render(&dashboard(
            Some(UsersPanelView { query: "zz".into(), users: vec![] }),
            None,
        ));
        assert!(users.contains("No users found..."));

        let products = TerminalRenderer.render(&dashboard(
            None,
            Some(ProductsPanelView {
                query: String::new(),
                sort: SortOption::Alphabet,
                products: vec![],
            }),
        ));
        assert!(products.contains("No products found..."));
        assert!(products.contains("Alphabetically"));
    }

    #[test]
    fn render_expanded_product() {
        let output = TerminalRenderer.render(&dashboard(
            None,
            Some(ProductsPanelView {
                query: String::new(),
                sort: SortOption::PriceHighToLow,
                products: vec![ProductRow {
                    id: 9,
                    title: "Lamp".into(),
                    price: 12.5,
                    expanded: true,
                    description: Some("Warm light".into()),
                    rating: Some(4.5),
                }],
            }),
        ));
        assert!(output.contains("Lamp"));
        assert!(output.contains("Price: 12.5"));
        assert!(output.contains("Hide Description"));
        assert!(output.contains("Description: Warm light"));
        assert!(output.contains("Rating: 4.5"));
        assert!(output.contains("Price (High to Low)"));
    }
}
