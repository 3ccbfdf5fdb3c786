// tests/catalog_page_tests.rs
// Server-side rendering of the catalog page body for each fetch outcome

use leptos::prelude::*;
use product_table::fixtures::catalogs::StoreCatalog;
use product_table::fixtures::TestCatalog;
use product_table::web_app::components::common::{LoadIndicator, LoadIndicatorProps};
use product_table::web_app::model::Product;
use product_table::web_app::pages::catalog::catalog_content;
use product_table::web_app::state::{LoadState, LOADING_MESSAGE, LOAD_ERROR_MESSAGE};

// Helper to render inside a reactive owner
fn render_with_owner<F>(f: F) -> String
where
    F: FnOnce() -> String,
{
    let owner = Owner::new();
    owner.set();
    f()
}

fn failed_fetch() -> Option<Result<Vec<Product>, ServerFnError>> {
    Some(Err(ServerFnError::new("Fetch failed: HTTP error! status: 500")))
}

#[test]
fn test_failed_fetch_shows_only_error_message() {
    let html = render_with_owner(|| catalog_content(failed_fetch()).to_html());

    assert!(html.contains(r#"id="loading""#), "{html}");
    assert!(html.contains(LOAD_ERROR_MESSAGE), "{html}");
    assert!(!html.contains(LOADING_MESSAGE), "{html}");
    assert!(!html.contains("spinner"), "{html}");
    assert!(!html.contains("productTable"), "{html}");
    assert!(!html.contains("searchInput"), "{html}");
    assert!(!html.contains("paginationContainer"), "{html}");
}

#[test]
fn test_pending_fetch_shows_loading_message() {
    let html = render_with_owner(|| catalog_content(None).to_html());

    assert!(html.contains(r#"id="loading""#), "{html}");
    assert!(html.contains(LOADING_MESSAGE), "{html}");
    assert!(!html.contains(LOAD_ERROR_MESSAGE), "{html}");
    assert!(!html.contains("productTable"), "{html}");
}

#[test]
fn test_successful_fetch_shows_table_without_indicator() {
    let products = StoreCatalog::products().unwrap();
    let html = render_with_owner(|| catalog_content(Some(Ok(products))).to_html());

    assert!(html.contains("productTable"), "{html}");
    assert!(html.contains("Majestic Mountain Graphic T-Shirt"), "{html}");
    assert!(html.contains("Showing 1-6 of 6"), "{html}");
    assert!(!html.contains(r#"id="loading""#), "{html}");
}

#[test]
fn test_load_indicator_error_variant() {
    let html = render_with_owner(|| {
        LoadIndicator(LoadIndicatorProps { state: LoadState::Failed }).to_html()
    });

    assert!(html.contains("error"), "{html}");
    assert!(html.contains(r#"role="alert""#), "{html}");
    assert!(html.contains(LOAD_ERROR_MESSAGE), "{html}");
}
