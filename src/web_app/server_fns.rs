// web_app/server_fns.rs - Leptos server function declarations
//
// These are accessible from both client (WASM) and server (native Rust).
// The #[server] macro generates the real function on the server and an HTTP
// stub on the client.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::Product;

#[cfg(feature = "ssr")]
async fn client() -> Result<crate::web_app::api::ProductsClient, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::{client, ProductsClient};

    // Context first (set by tests or a custom server setup)
    if let Some(client) = use_context::<ProductsClient>() {
        return Ok(client);
    }

    // Global client, which also carries the test override
    if let Some(client) = client::get_client() {
        return Ok(client);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(client) = req.app_data::<Data<ProductsClient>>() {
                return Ok(client.as_ref().clone());
            }
        }
        Err(e) => tracing::error!("Failed to extract HttpRequest: {}", e),
    }

    Err(ServerFnError::new("Products client not available"))
}

/// Fetch the full product list from the remote products API
#[server(FetchProducts, "/api")]
pub async fn fetch_products() -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::products;

    let client = client().await?;
    let result = products::fetch_all(&client).await;

    match &result {
        Ok(list) => tracing::info!("Fetched {} products", list.len()),
        Err(e) => tracing::error!(status = ?e.status(), "Error fetching products: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Fetch failed: {}", e)))
}
