//! Dietary rule evaluation
//!
//! Turns a [`NormalizedProduct`] and a [`DietaryProfile`] into an
//! [`AnalysisVerdict`]. Evaluation is a pure function of its inputs: every
//! rule family is scoped to one diet and fires when any of its trigger
//! substrings occurs (case-insensitively) in the ingredient text.
//!
//! When several families fire, the most restrictive status wins
//! (`NO` > `MODERATE` > `YES`); among equally restrictive families the one
//! declared first wins. No family firing leaves the default `YES` verdict.

mod image;
mod rule;

pub use image::{
    IMAGE_ANALYSIS_INGREDIENT, IMAGE_ANALYSIS_PENDING_REASON, ImageAnalysis, analyze_image,
    analyze_image_label,
};
pub use rule::{DietRule, FLAGGED_HARMFUL_SUMMARY};

use strsim::jaro_winkler;

use crate::{AnalysisVerdict, DietaryProfile, NormalizedProduct, VerdictStatus};

pub const SAFE_REASON: &str = "Safe to consume based on your profile.";
pub const NO_HARMFUL_INGREDIENTS: &str = "None";

/// Minimum similarity for suggesting a known diet name
const DIET_SUGGESTION_THRESHOLD: f64 = 0.8;

/// The verdict returned when no rule fires
pub fn default_verdict() -> AnalysisVerdict {
    AnalysisVerdict::new(
        VerdictStatus::Yes,
        SAFE_REASON,
        VerdictStatus::Yes.default_health_score(),
        NO_HARMFUL_INGREDIENTS,
    )
}

/// Evaluate a product with the built-in rule families only
pub fn evaluate(product: &NormalizedProduct, profile: &DietaryProfile) -> AnalysisVerdict {
    DietaryAnalyzer::default().evaluate(product, profile)
}

/// An ordered set of diet rule families
#[derive(Debug, Clone)]
pub struct DietaryAnalyzer {
    rules: Vec<DietRule>,
}

impl Default for DietaryAnalyzer {
    fn default() -> Self {
        Self {
            rules: vec![DietRule::vegan()],
        }
    }
}

impl DietaryAnalyzer {
    /// Built-in families followed by `extra`, in declaration order
    pub fn with_extra_rules(extra: impl IntoIterator<Item = DietRule>) -> Self {
        let mut analyzer = Self::default();
        analyzer.rules.extend(extra);
        analyzer
    }

    pub fn rules(&self) -> &[DietRule] {
        &self.rules
    }

    pub fn evaluate(&self, product: &NormalizedProduct, profile: &DietaryProfile) -> AnalysisVerdict {
        let ingredients = product.ingredient_text.to_lowercase();

        let mut winner: Option<&DietRule> = None;
        for rule in self.rules.iter().filter(|r| profile.contains(&r.diet)) {
            if !rule.matches(&ingredients) {
                continue;
            }
            match winner {
                Some(current) if current.status.severity() >= rule.status.severity() => {}
                _ => winner = Some(rule),
            }
        }

        match winner {
            Some(rule) => {
                tracing::debug!(
                    "Diet rule '{}' fired for {}: {}",
                    rule.diet,
                    product.product_name,
                    rule.status
                );
                rule.verdict()
            }
            None => default_verdict(),
        }
    }

    /// Whether any rule family is scoped to `diet`
    pub fn knows_diet(&self, diet: &str) -> bool {
        let diet = diet.trim().to_lowercase();
        self.rules.iter().any(|r| r.diet == diet)
    }

    /// The known diet name closest to `diet`, if it is close enough to be a typo
    pub fn suggest_diet(&self, diet: &str) -> Option<&str> {
        let diet = diet.trim().to_lowercase();
        self.rules
            .iter()
            .map(|r| (r.diet.as_str(), jaro_winkler(&diet, &r.diet)))
            .filter(|(_, score)| *score >= DIET_SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}
