// web_app/api/products.rs - The products API call
//
// One GET, no retry. Anything other than a 2xx response carrying a JSON
// array of products is a `FetchError`.

use super::client::ProductsClient;
use super::error::FetchError;
use crate::web_app::model::Product;

/// Fetch the full product list
pub async fn fetch_all(client: &ProductsClient) -> Result<Vec<Product>, FetchError> {
    let url = &client.config().products_url;
    tracing::debug!("GET {}", url);

    let response = client
        .http()
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let products: Vec<Product> = serde_json::from_slice(&body)?;

    tracing::debug!("Decoded {} products from {}", products.len(), url);
    Ok(products)
}
