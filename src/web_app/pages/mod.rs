// web_app/pages/mod.rs - Page components module
//
// - CatalogPage: Product table with search, sort and pagination

pub mod catalog;

// Re-export page components
pub use catalog::CatalogPage;
