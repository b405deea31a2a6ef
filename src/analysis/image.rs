//! Image-based product analysis (not implemented yet)

use serde::Serialize;

use super::NO_HARMFUL_INGREDIENTS;
use crate::{AnalysisVerdict, VerdictStatus};

pub const IMAGE_ANALYSIS_PENDING_REASON: &str = "This feature is coming soon.";
pub const IMAGE_ANALYSIS_INGREDIENT: &str = "Image Analysis Not Implemented";

/// What an image analysis read off the label, and the verdict for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    #[serde(rename = "ingredient")]
    pub ingredient_text: String,
    #[serde(flatten)]
    pub verdict: AnalysisVerdict,
}

/// Analyze a product photo. Always answers `MODERATE` until OCR lands.
pub async fn analyze_image(image_uri: &str) -> AnalysisVerdict {
    analyze_image_label(image_uri).await.verdict
}

/// Like [`analyze_image`], also returning the ingredient text read off the label
pub async fn analyze_image_label(image_uri: &str) -> ImageAnalysis {
    tracing::debug!("Image analysis requested for {}", image_uri);
    ImageAnalysis {
        ingredient_text: IMAGE_ANALYSIS_INGREDIENT.to_string(),
        verdict: AnalysisVerdict::new(
            VerdictStatus::Moderate,
            IMAGE_ANALYSIS_PENDING_REASON,
            VerdictStatus::Moderate.default_health_score(),
            NO_HARMFUL_INGREDIENTS,
        ),
    }
}
