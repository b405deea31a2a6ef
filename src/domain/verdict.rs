use serde::{Deserialize, Serialize};

/// Dietary-safety classification of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerdictStatus {
    Yes,
    No,
    Moderate,
}

impl VerdictStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Yes => "YES",
            VerdictStatus::No => "NO",
            VerdictStatus::Moderate => "MODERATE",
        }
    }

    /// Health score implied by a status when a rule does not set its own
    pub fn default_health_score(&self) -> u8 {
        match self {
            VerdictStatus::Yes => 90,
            VerdictStatus::Moderate => 50,
            VerdictStatus::No => 20,
        }
    }

    /// Higher is more restrictive: `NO` > `MODERATE` > `YES`
    pub fn severity(&self) -> u8 {
        match self {
            VerdictStatus::Yes => 0,
            VerdictStatus::Moderate => 1,
            VerdictStatus::No => 2,
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome of evaluating a product against a dietary profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisVerdict {
    pub status: VerdictStatus,
    pub reason: String,
    /// Always within 0..=100
    pub health_score: u8,
    pub harmful_ingredients: String,
}

impl AnalysisVerdict {
    pub fn new(
        status: VerdictStatus,
        reason: impl Into<String>,
        health_score: u8,
        harmful_ingredients: impl Into<String>,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            health_score: health_score.min(100),
            harmful_ingredients: harmful_ingredients.into(),
        }
    }
}
