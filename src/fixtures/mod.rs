// fixtures/mod.rs - Test fixtures module
//
// Reusable product catalogs for tests. Each catalog is a raw JSON payload
// shaped like the products API response, so the same fixture can be served
// by a mock API in integration tests and decoded directly in unit tests.

pub mod catalogs;

use crate::web_app::model::Product;

/// A canned products API response
pub trait TestCatalog {
    /// Body returned by the products endpoint
    fn products_json() -> &'static str;

    /// The body decoded into products
    fn products() -> Result<Vec<Product>, serde_json::Error> {
        serde_json::from_str(Self::products_json())
    }
}
