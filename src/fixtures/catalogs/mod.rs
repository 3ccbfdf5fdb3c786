// fixtures/catalogs/mod.rs
//
// Catalog fixtures. `StoreCatalog` mimics real API output, including the
// awkward records; `numbered_products` builds lists of any length for
// pagination tests.

pub mod products;

pub use products::{numbered_products, priced_products, StoreCatalog};
