//! CLI command implementations

pub mod analyze;
pub mod init;
pub mod lookup;
pub mod output;
pub mod scan;

use foodscan::DietaryProfile;
use foodscan::analysis::DietaryAnalyzer;

/// Tell the user about diets no rule family covers
pub(crate) fn warn_unknown_diets(analyzer: &DietaryAnalyzer, profile: &DietaryProfile) {
    for diet in profile.diets().filter(|d| !analyzer.knows_diet(d)) {
        match analyzer.suggest_diet(diet) {
            Some(suggestion) => eprintln!(
                "Warning: no rules for diet '{}' (did you mean '{}'?)",
                diet, suggestion
            ),
            None => eprintln!("Warning: no rules for diet '{}', it will not affect verdicts", diet),
        }
    }
}
