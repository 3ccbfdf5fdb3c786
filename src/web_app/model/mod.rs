// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON returned by the products API and travel
// unchanged from the server function to the hydrated client.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Image shown when a product has neither its own images nor a category image
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/100x100/333/FFF?text=No+Image";

/// Label shown in the category column when the product has no category
pub const MISSING_CATEGORY: &str = "N/A";

/// Product category as nested in a product record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Product from the remote products API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub creation_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

// A category whose name is missing or null still decodes; the table shows it as N/A
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Timestamps are informational only, so anything that is not RFC 3339 becomes None
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

impl Product {
    /// URL of the thumbnail shown in the table.
    ///
    /// The API sometimes returns image entries wrapped in stray brackets or
    /// quotes (`["https://..."]`), so those characters are stripped from the
    /// first entry. Falls back to the category image, then the placeholder.
    pub fn thumbnail_url(&self) -> String {
        let first_image = self
            .images
            .as_deref()
            .and_then(|images| images.first())
            .map(|raw| {
                raw.chars()
                    .filter(|c| !matches!(c, '[' | ']' | '"' | '\''))
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .filter(|url| !url.is_empty());

        if let Some(url) = first_image {
            return url;
        }

        self.category
            .as_ref()
            .and_then(|c| c.image.clone())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }

    /// Image swapped in when the thumbnail fails to load in the browser
    pub fn fallback_image_url(&self) -> String {
        format!("https://placehold.co/100x100/333/FFF?text={}", self.id)
    }

    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(MISSING_CATEGORY)
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Price as rendered in the table, e.g. `$44` or `$12.5`
    pub fn price_display(&self) -> String {
        format!("${}", self.price.normalize())
    }
}

/// Column a product list can be sorted by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Title,
    Price,
    Category,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Id,
        SortField::Title,
        SortField::Price,
        SortField::Category,
    ];

    /// Value of the header's `data-sort` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Price => "price",
            SortField::Category => "category",
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Title => "Title",
            SortField::Price => "Price",
            SortField::Category => "Category",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "price" => Ok(SortField::Price),
            "category" => Ok(SortField::Category),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

/// Sort direction, doubling as the CSS class put on the active header
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn css_class(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}
