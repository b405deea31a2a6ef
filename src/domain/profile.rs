use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The diets a user has declared (e.g. `{"vegan"}`)
///
/// Diet names are stored trimmed and lowercased so that rule lookups do not
/// depend on how the profile was typed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryProfile {
    #[serde(default)]
    diets: BTreeSet<String>,
}

impl DietaryProfile {
    pub fn new<I, S>(diets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            diets: diets
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, diet: &str) -> bool {
        self.diets.contains(&diet.trim().to_lowercase())
    }

    pub fn diets(&self) -> impl Iterator<Item = &str> {
        self.diets.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for DietaryProfile {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_normalizes_diet_names() {
        let profile = DietaryProfile::new([" Vegan ", "", "KETO"]);
        assert!(profile.contains("vegan"));
        assert!(profile.contains("Keto"));
        assert_eq!(profile.diets().count(), 2);
    }
}
