//! Deterministic record for the demo barcode

use super::database::RawProduct;
use super::normalize::first_present;
use crate::{AnalysisVerdict, NormalizedProduct, ResolvedProduct, VerdictStatus};

pub const FIXTURE_BARCODE: &str = "8886467124723";
pub const FIXTURE_IMAGE_URI: &str =
    "https://images.unsplash.com/photo-1621447591183-5f34ccf9cd9e?auto=format&fit=crop&w=800&q=80";

const FIXTURE_NAME: &str = "Pringles Sour Cream and Onion";
const FIXTURE_INGREDIENTS: &str = "Corn, Vegetable Oil (Palm Oil), Sugar, High Fructose Corn Syrup, Salt, Artificial Flavor, Red 40, Yellow 5.";
const FIXTURE_REASON: &str = "Contains multiple unhealthy additives.";
const FIXTURE_HEALTH_SCORE: u8 = 15;
const FIXTURE_HARMFUL: &str = "High Fructose Corn Syrup, Red 40, Yellow 5, Palm Oil";

pub fn is_fixture(payload: &str) -> bool {
    payload == FIXTURE_BARCODE
}

/// The fixture record, using the remote product's image when one was found
pub fn fixture_product(found: Option<&RawProduct>) -> ResolvedProduct {
    let image = found
        .and_then(|raw| first_present([raw.image_url.as_deref(), raw.image_front_url.as_deref()]))
        .unwrap_or(FIXTURE_IMAGE_URI)
        .to_string();

    ResolvedProduct::assemble(
        NormalizedProduct {
            product_name: FIXTURE_NAME.to_string(),
            ingredient_text: FIXTURE_INGREDIENTS.to_string(),
            nutrition_image_uri: image.clone(),
            image_uri: image,
        },
        AnalysisVerdict::new(
            VerdictStatus::No,
            FIXTURE_REASON,
            FIXTURE_HEALTH_SCORE,
            FIXTURE_HARMFUL,
        ),
    )
}
