// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Loading indicator, also used for the load error
// - search.rs: Search box, page-size selector, pagination
// - product.rs: Product table, rows, sortable headers, tooltip

pub mod common;
pub mod search;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use product::*;
