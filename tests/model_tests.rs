// tests/model_tests.rs - Decoding product records the way the API sends them

use chrono::{Datelike, Timelike};
use product_table::fixtures::catalogs::StoreCatalog;
use product_table::fixtures::TestCatalog;
use product_table::web_app::model::{Product, PLACEHOLDER_IMAGE};
use rust_decimal::Decimal;

#[test]
fn test_decodes_full_record() {
    let products = StoreCatalog::products().unwrap();
    let first = &products[0];

    assert_eq!(first.id, 1);
    assert_eq!(first.slug.as_deref(), Some("majestic-mountain-graphic-t-shirt"));
    assert_eq!(first.price, Decimal::from(44));
    assert_eq!(first.images.as_ref().map(Vec::len), Some(2));

    let category = first.category.as_ref().unwrap();
    assert_eq!(category.id, Some(1));
    assert_eq!(category.slug.as_deref(), Some("clothes"));

    let created = first.creation_at.unwrap();
    assert_eq!((created.year(), created.month(), created.day()), (2025, 1, 10));
    assert_eq!(created.hour(), 8);
}

#[test]
fn test_decodes_minimal_record() {
    let json = r#"{ "id": 42, "title": "Bare", "price": 3.25 }"#;
    let product: Product = serde_json::from_str(json).unwrap();

    assert_eq!(product.id, 42);
    assert_eq!(product.price, Decimal::new(325, 2));
    assert!(product.description.is_none());
    assert!(product.category.is_none());
    assert!(product.images.is_none());
    assert!(product.creation_at.is_none());
    assert_eq!(product.description_text(), "");
    assert_eq!(product.thumbnail_url(), PLACEHOLDER_IMAGE);
    assert_eq!(product.category_name(), "N/A");
}

#[test]
fn test_null_optional_fields() {
    let json = r#"{
        "id": 9, "title": "Nulls", "price": 10,
        "description": null, "category": null, "images": null
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.thumbnail_url(), PLACEHOLDER_IMAGE);
}

#[test]
fn test_missing_title_is_rejected() {
    let json = r#"{ "id": 1, "price": 10 }"#;
    assert!(serde_json::from_str::<Product>(json).is_err());
}

#[test]
fn test_product_survives_server_fn_encoding() {
    // Server functions ship products to the browser as JSON
    let products = StoreCatalog::products().unwrap();
    let encoded = serde_json::to_string(&products).unwrap();
    let decoded: Vec<Product> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, products);
    assert_eq!(decoded[2].price_display(), "$79.5");
}

#[test]
fn test_date_only_timestamp_does_not_drop_the_list() {
    let json = r#"[
        { "id": 1, "title": "Dated", "price": 5, "creationAt": "2025-01-10", "updatedAt": 17 },
        { "id": 2, "title": "Fine", "price": 6, "creationAt": "2025-01-10T08:00:00.000Z" }
    ]"#;
    let products: Vec<Product> = serde_json::from_str(json).unwrap();

    assert_eq!(products.len(), 2);
    assert!(products[0].creation_at.is_none());
    assert!(products[0].updated_at.is_none());
    assert!(products[1].creation_at.is_some());
}

#[test]
fn test_category_without_name_shows_missing_label() {
    let json = r#"[
        { "id": 1, "title": "Nameless", "price": 5, "category": { "id": 2, "image": "x" } },
        { "id": 2, "title": "Null name", "price": 5, "category": { "id": 3, "name": null } },
        { "id": 3, "title": "Blank name", "price": 5, "category": { "name": "  " } },
        { "id": 4, "title": "Named", "price": 5, "category": { "name": "Shoes" } }
    ]"#;
    let products: Vec<Product> = serde_json::from_str(json).unwrap();

    let names: Vec<&str> = products.iter().map(Product::category_name).collect();
    assert_eq!(names, ["N/A", "N/A", "N/A", "Shoes"]);
    assert_eq!(products[0].thumbnail_url(), "x");
}
