use serde::{Deserialize, Serialize};

use super::NO_HARMFUL_INGREDIENTS;
use crate::{AnalysisVerdict, VerdictStatus};

pub const FLAGGED_HARMFUL_SUMMARY: &str = "Contains allergens/unwanted ingredients";

/// One rule family: a diet, its trigger substrings, and the verdict it yields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRule {
    /// Diet this family is scoped to (lowercase)
    pub diet: String,

    /// Case-insensitive substrings searched for in the ingredient text
    #[serde(default)]
    pub triggers: Vec<String>,

    pub status: VerdictStatus,

    pub reason: String,

    /// Defaults from `status` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<u8>,

    /// Defaults from `status` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harmful_ingredients: Option<String>,
}

impl DietRule {
    pub fn vegan() -> Self {
        Self {
            diet: "vegan".to_string(),
            triggers: vec!["milk".to_string(), "egg".to_string(), "honey".to_string()],
            status: VerdictStatus::No,
            reason: "Contains animal products (milk/egg/honey).".to_string(),
            health_score: None,
            harmful_ingredients: None,
        }
    }

    /// `ingredients` must already be lowercased
    pub fn matches(&self, ingredients: &str) -> bool {
        self.triggers
            .iter()
            .map(|t| t.trim().to_lowercase())
            .any(|t| !t.is_empty() && ingredients.contains(&t))
    }

    pub fn verdict(&self) -> AnalysisVerdict {
        let health_score = self
            .health_score
            .unwrap_or_else(|| self.status.default_health_score());

        let harmful = self.harmful_ingredients.clone().unwrap_or_else(|| {
            match self.status {
                VerdictStatus::No => FLAGGED_HARMFUL_SUMMARY,
                VerdictStatus::Yes | VerdictStatus::Moderate => NO_HARMFUL_INGREDIENTS,
            }
            .to_string()
        });

        AnalysisVerdict::new(self.status, self.reason.clone(), health_score, harmful)
    }
}
