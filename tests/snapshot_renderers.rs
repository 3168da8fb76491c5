//! Snapshot tests for page renderers.
//!
//! Each test renders the same signed-in product view and compares the
//! output against expected fixture files.

use std::path::Path;

use board::loader::DirSource;
use board::models::SortOption;
use board::output::PageRenderer;
use board::output::json::JsonRenderer;
use board::output::terminal::TerminalRenderer;
use board::page::{Event, Page, PageView};
use board::view::Panel;

/// Signed in as `a`, products open, searching "ap", cheapest first, Apple expanded.
async fn standard_view() -> PageView {
    let source = DirSource::new(Path::new("tests/fixtures/site"));
    let mut page = Page::mount(&source, SortOption::Alphabet).await;
    for event in [
        Event::InputId("a".into()),
        Event::InputPassword("1".into()),
        Event::Submit,
        Event::TogglePanel(Panel::Products),
        Event::Search(Panel::Products, "ap".into()),
        Event::SelectSort(SortOption::PriceLowToHigh),
        Event::ToggleDescription(3),
    ] {
        assert!(page.dispatch(event));
    }
    page.view()
}

#[tokio::test]
async fn snapshot_json_renderer() {
    let output = JsonRenderer.render(&standard_view().await);

    let actual: serde_json::Value = serde_json::from_str(&output).unwrap();
    let expected_str = std::fs::read_to_string("tests/fixtures/expected_json_page.json").unwrap();
    let expected: serde_json::Value = serde_json::from_str(&expected_str).unwrap();

    assert_eq!(
        actual, expected,
        "JSON renderer output does not match snapshot.\nActual:\n{output}"
    );
}

#[tokio::test]
async fn snapshot_terminal_renderer() {
    colored::control::set_override(false);
    let output = TerminalRenderer.render(&standard_view().await);

    let expected = std::fs::read_to_string("tests/fixtures/expected_terminal_page.txt").unwrap();

    assert_eq!(
        output, expected,
        "Terminal renderer output does not match snapshot.\nActual:\n{output}"
    );
}
