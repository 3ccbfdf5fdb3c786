// web_app/api/mod.rs - API module for server-side logic
//
// This module owns the outbound HTTP client and the single call this
// application makes to the remote products API.

pub mod client;
pub mod error;
pub mod products;

pub use client::{ApiConfig, ProductsClient};
pub use error::FetchError;
