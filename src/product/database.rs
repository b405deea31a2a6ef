//! Remote product database seam and its wire types

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Why a lookup produced no usable response
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to read response: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Response envelope of a product query
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductResponse {
    /// `1` when the product was found
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<i64>,

    #[serde(default, deserialize_with = "lenient")]
    pub status_verbose: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub product: Option<RawProduct>,
}

impl ProductResponse {
    pub fn is_found(&self) -> bool {
        self.status == Some(1) && self.product.is_some()
    }

    /// The product record, if the source reported it as found
    pub fn into_found(self) -> Option<RawProduct> {
        if self.status == Some(1) { self.product } else { None }
    }
}

/// The unnormalized product record; any field may be absent, and a field of
/// the wrong JSON type counts as absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawProduct {
    #[serde(default, deserialize_with = "lenient")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ingredients_text_en: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ingredients_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub ingredients: Option<Vec<RawIngredient>>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_front_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_nutrition_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_nutrition_small_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawIngredient {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// Any JSON value; `None` when it does not fit `T`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// A JSON array of records; entries that do not fit become empty records
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// A source of product records keyed by barcode
#[async_trait]
pub trait ProductDatabase: Send + Sync {
    /// Fetch the raw response for `barcode`
    async fn fetch(&self, barcode: &str) -> Result<ProductResponse, LookupError>;
}

#[async_trait]
impl<T: ProductDatabase + ?Sized> ProductDatabase for std::sync::Arc<T> {
    async fn fetch(&self, barcode: &str) -> Result<ProductResponse, LookupError> {
        (**self).fetch(barcode).await
    }
}
