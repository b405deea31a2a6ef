//! Configuration loading and management

mod io;
mod settings;

pub use io::DEFAULT_CONFIG;
pub use settings::{DatabaseSettings, ProfileConfig, Settings};

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::DietaryProfile;
use crate::analysis::{DietRule, DietaryAnalyzer};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Scan behaviour
    #[serde(default)]
    pub settings: Settings,

    /// Remote product database
    #[serde(default)]
    pub database: DatabaseSettings,

    /// The user's stored dietary profile
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Extra rule families, evaluated after the built-in ones
    #[serde(default, rename = "rule", skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<DietRule>,
}

impl Config {
    pub fn scan_timeout(&self) -> Duration {
        Duration::from_millis(self.settings.scan_timeout_ms)
    }

    /// Analyzer with the built-in families plus the configured ones
    pub fn analyzer(&self) -> DietaryAnalyzer {
        DietaryAnalyzer::with_extra_rules(self.rules.iter().cloned())
    }

    /// The stored profile, or `diets` when any were given on the command line
    pub fn profile_with_overrides(&self, diets: &[String]) -> DietaryProfile {
        if diets.is_empty() {
            DietaryProfile::new(&self.profile.diets)
        } else {
            DietaryProfile::new(diets)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VerdictStatus;

    #[test]
    fn test_default_config_template_matches_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).expect("template parses");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config: Config = toml::from_str("[settings]\nscan_timeout_ms = 5000\n").expect("parse");
        assert_eq!(config.scan_timeout(), Duration::from_millis(5000));
        assert_eq!(config.database, DatabaseSettings::default());
        assert!(config.profile.diets.is_empty());
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_rules_parse_and_extend_analyzer() {
        let config: Config = toml::from_str(
            r#"
[profile]
diets = ["Vegetarian"]

[[rule]]
diet = "vegetarian"
triggers = ["gelatin", "rennet"]
status = "NO"
reason = "Contains animal-derived setting agents."
"#,
        )
        .expect("parse");

        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].status, VerdictStatus::No);
        assert_eq!(config.rules[0].health_score, None);

        let analyzer = config.analyzer();
        assert_eq!(analyzer.rules().len(), 2);
        assert_eq!(analyzer.rules()[0].diet, "vegan");
        assert!(analyzer.knows_diet("vegetarian"));

        let profile = config.profile_with_overrides(&[]);
        assert!(profile.contains("vegetarian"));

        let profile = config.profile_with_overrides(&["vegan".to_string()]);
        assert!(profile.contains("vegan"));
        assert!(!profile.contains("vegetarian"));
    }
}
