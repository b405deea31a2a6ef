//! Field normalization through ordered fallback lists
//!
//! Each field is resolved by taking the first candidate that is present and
//! non-empty, in a fixed priority order.

use super::database::RawProduct;
use crate::NormalizedProduct;

pub const INGREDIENTS_NOT_FOUND: &str = "Ingredients not found";
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";
pub const DEFAULT_IMAGE_URI: &str =
    "https://images.unsplash.com/photo-1542838132-92c53300491e?auto=format&fit=crop&w=800&q=80";

/// First present, non-empty candidate
pub(super) fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

pub fn normalize(raw: &RawProduct) -> NormalizedProduct {
    let image_uri = image_uri(raw);
    let nutrition_image_uri = first_present([
        raw.image_nutrition_url.as_deref(),
        raw.image_nutrition_small_url.as_deref(),
    ])
    .map(str::to_string)
    .unwrap_or_else(|| image_uri.clone());

    NormalizedProduct {
        product_name: first_present([raw.product_name.as_deref()])
            .unwrap_or(UNKNOWN_PRODUCT_NAME)
            .to_string(),
        ingredient_text: ingredient_text(raw),
        image_uri,
        nutrition_image_uri,
    }
}

/// Localized text, generic text, the joined ingredient list, then the sentinel
fn ingredient_text(raw: &RawProduct) -> String {
    // Entries without text join as empty strings.
    let joined = raw.ingredients.as_ref().map(|list| {
        list.iter()
            .map(|i| i.text.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ")
    });

    first_present([
        raw.ingredients_text_en.as_deref(),
        raw.ingredients_text.as_deref(),
        joined.as_deref(),
    ])
    .unwrap_or(INGREDIENTS_NOT_FOUND)
    .to_string()
}

fn image_uri(raw: &RawProduct) -> String {
    first_present([raw.image_url.as_deref(), raw.image_front_url.as_deref()])
        .unwrap_or(DEFAULT_IMAGE_URI)
        .to_string()
}
