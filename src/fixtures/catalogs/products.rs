// fixtures/catalogs/products.rs
//
// A small store catalog in the exact shape the products API returns.
// Records 4-6 cover the edge cases seen in live data: an image list with
// stray JSON brackets, a product without images, a product without category.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::fixtures::TestCatalog;
use crate::web_app::model::{Category, Product};

pub struct StoreCatalog;

impl TestCatalog for StoreCatalog {
    fn products_json() -> &'static str {
        r#"[
            {
                "id": 1,
                "title": "Majestic Mountain Graphic T-Shirt",
                "slug": "majestic-mountain-graphic-t-shirt",
                "price": 44,
                "description": "Elevate your wardrobe with this stylish black t-shirt featuring a striking mountain design.",
                "category": {
                    "id": 1,
                    "name": "Clothes",
                    "image": "https://i.imgur.com/QkIa5tT.jpeg",
                    "slug": "clothes",
                    "creationAt": "2025-01-10T08:00:00.000Z",
                    "updatedAt": "2025-01-10T08:00:00.000Z"
                },
                "images": ["https://i.imgur.com/QkIa5tT.jpeg", "https://i.imgur.com/jb5Yu0h.jpeg"],
                "creationAt": "2025-01-10T08:00:00.000Z",
                "updatedAt": "2025-01-10T08:00:00.000Z"
            },
            {
                "id": 2,
                "title": "Sleek Wireless Headphone & Inked Earbud Set",
                "slug": "sleek-wireless-headphone-inked-earbud-set",
                "price": 44,
                "description": "Experience the fusion of style and sound with this sophisticated audio set.",
                "category": {
                    "id": 2,
                    "name": "electronics",
                    "image": "https://i.imgur.com/ZANVnHE.jpeg",
                    "slug": "electronics"
                },
                "images": ["https://i.imgur.com/yVeIeDa.jpeg"],
                "creationAt": "2025-01-10T08:00:00.000Z",
                "updatedAt": "2025-01-10T08:00:00.000Z"
            },
            {
                "id": 3,
                "title": "Classic Comfort Drawstring Joggers",
                "slug": "classic-comfort-drawstring-joggers",
                "price": 79.5,
                "description": "Experience the perfect blend of comfort and style with these joggers.",
                "category": {
                    "id": 1,
                    "name": "Clothes",
                    "image": "https://i.imgur.com/QkIa5tT.jpeg",
                    "slug": "clothes"
                },
                "images": ["https://i.imgur.com/mp3rUty.jpeg"],
                "creationAt": "2025-01-10T08:00:00.000Z",
                "updatedAt": "2025-01-10T08:00:00.000Z"
            },
            {
                "id": 4,
                "title": "Wireless Ergonomic Mouse",
                "price": 25,
                "description": "A mouse that fits the hand.",
                "category": {
                    "id": 2,
                    "name": "Electronics",
                    "image": "https://i.imgur.com/ZANVnHE.jpeg"
                },
                "images": ["[\"https://i.imgur.com/w3Y8NwQ.jpeg\"", "\"https://i.imgur.com/WJFOGIC.jpeg\"]"]
            },
            {
                "id": 5,
                "title": "Modern Elegance Teal Armchair",
                "price": 25,
                "description": "Elevate your living space with this beautifully crafted armchair.",
                "category": {
                    "id": 3,
                    "name": "Furniture",
                    "image": "https://i.imgur.com/Qphac99.jpeg"
                }
            },
            {
                "id": 6,
                "title": "Mystery Box",
                "price": 1,
                "images": []
            }
        ]"#
    }
}

/// `count` products titled `Product 1` .. `Product <count>`, ids matching,
/// in id order.
pub fn numbered_products(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|n| product(n as i64, &format!("Product {n}"), Decimal::from(n as i64)))
        .collect()
}

/// One product per price, in the given order, with ids starting at 1
pub fn priced_products(prices: &[i64]) -> Vec<Product> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            let id = i as i64 + 1;
            product(id, &format!("Item {id}"), Decimal::from(price))
        })
        .collect()
}

fn product(id: i64, title: &str, price: Decimal) -> Product {
    let stamp = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).single();
    Product {
        id,
        title: title.to_string(),
        slug: Some(title.to_lowercase().replace(' ', "-")),
        price,
        description: Some(format!("Description of {title}")),
        category: Some(Category {
            id: Some(1),
            name: "Misc".to_string(),
            image: None,
            slug: Some("misc".to_string()),
        }),
        images: Some(vec![format!("https://example.com/{id}.jpeg")]),
        creation_at: stamp,
        updated_at: stamp,
    }
}
