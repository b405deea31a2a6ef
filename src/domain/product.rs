use serde::{Deserialize, Serialize};

use super::verdict::{AnalysisVerdict, VerdictStatus};

/// A product record after fallback resolution of every field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    pub product_name: String,
    /// Never empty; falls back to a sentinel when the source has no ingredients
    #[serde(rename = "ingredient")]
    pub ingredient_text: String,
    pub image_uri: String,
    pub nutrition_image_uri: String,
}

/// The terminal record handed back to callers
///
/// Built only through [`ResolvedProduct::assemble`], so the fixture path and
/// the computed path produce the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProduct {
    #[serde(flatten)]
    pub product: NormalizedProduct,
    #[serde(flatten)]
    pub verdict: AnalysisVerdict,
}

impl ResolvedProduct {
    /// Merge a normalized product with its verdict
    pub fn assemble(product: NormalizedProduct, verdict: AnalysisVerdict) -> Self {
        Self { product, verdict }
    }

    pub fn product_name(&self) -> &str {
        &self.product.product_name
    }

    pub fn status(&self) -> VerdictStatus {
        self.verdict.status
    }

    pub fn health_score(&self) -> u8 {
        self.verdict.health_score
    }
}
