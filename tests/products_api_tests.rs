// tests/products_api_tests.rs
// Fetching the product list over real HTTP against a local mock API

mod common;

use std::time::Duration;

use product_table::fixtures::catalogs::StoreCatalog;
use product_table::fixtures::TestCatalog;
use product_table::web_app::api::{products, ApiConfig, FetchError, ProductsClient};

use common::{closed_port_url, spawn_mock_api};

fn client_for(url: &str) -> anyhow::Result<ProductsClient> {
    let client = ProductsClient::new(ApiConfig {
        products_url: url.to_string(),
        timeout: Duration::from_secs(5),
    })?;
    Ok(client)
}

#[actix_web::test]
async fn test_fetch_all_decodes_catalog() -> anyhow::Result<()> {
    let api = spawn_mock_api(200, StoreCatalog::products_json()).await?;
    let client = client_for(&api.url)?;

    let list = products::fetch_all(&client).await?;
    api.stop().await;

    assert_eq!(list, StoreCatalog::products()?);
    assert_eq!(list.len(), 6);
    assert_eq!(list[0].title, "Majestic Mountain Graphic T-Shirt");
    assert_eq!(list[0].category_name(), "Clothes");
    Ok(())
}

#[actix_web::test]
async fn test_fetch_all_empty_array() -> anyhow::Result<()> {
    let api = spawn_mock_api(200, "[]").await?;
    let client = client_for(&api.url)?;

    let list = products::fetch_all(&client).await?;
    api.stop().await;

    assert!(list.is_empty());
    Ok(())
}

#[actix_web::test]
async fn test_fetch_all_server_error() -> anyhow::Result<()> {
    let api = spawn_mock_api(500, r#"{"message":"boom"}"#).await?;
    let client = client_for(&api.url)?;

    let result = products::fetch_all(&client).await;
    api.stop().await;

    let err = result.expect_err("HTTP 500 must fail the fetch");
    assert!(matches!(err, FetchError::Status(500)), "got {err:?}");
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("status: 500"));
    Ok(())
}

#[actix_web::test]
async fn test_fetch_all_not_found() -> anyhow::Result<()> {
    let api = spawn_mock_api(404, "").await?;
    let client = client_for(&api.url)?;

    let result = products::fetch_all(&client).await;
    api.stop().await;

    assert!(matches!(result, Err(FetchError::Status(404))));
    Ok(())
}

#[actix_web::test]
async fn test_fetch_all_malformed_body() -> anyhow::Result<()> {
    let api = spawn_mock_api(200, "[{\"id\": 1, \"title\": ").await?;
    let client = client_for(&api.url)?;

    let result = products::fetch_all(&client).await;
    api.stop().await;

    let err = result.expect_err("truncated JSON must fail the fetch");
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    assert_eq!(err.status(), None);
    Ok(())
}

#[actix_web::test]
async fn test_fetch_all_object_instead_of_array() -> anyhow::Result<()> {
    let api = spawn_mock_api(200, r#"{"products": []}"#).await?;
    let client = client_for(&api.url)?;

    let result = products::fetch_all(&client).await;
    api.stop().await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
    Ok(())
}

#[actix_web::test]
async fn test_fetch_all_connection_refused() -> anyhow::Result<()> {
    let client = client_for(&closed_port_url()?)?;

    let result = products::fetch_all(&client).await;

    let err = result.expect_err("nothing is listening");
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    Ok(())
}
