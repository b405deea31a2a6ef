use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Barcode encoding standards the camera is asked to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    Qr,
    Ean13,
    Ean8,
    UpcE,
    UpcA,
    Code128,
}

impl Symbology {
    /// All symbologies, in the order the scanner settings list them
    pub const ALL: [Symbology; 6] = [
        Symbology::Qr,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::UpcE,
        Symbology::UpcA,
        Symbology::Code128,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::Qr => "qr",
            Symbology::Ean13 => "ean13",
            Symbology::Ean8 => "ean8",
            Symbology::UpcE => "upc_e",
            Symbology::UpcA => "upc_a",
            Symbology::Code128 => "code128",
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a symbology name is not one the scanner supports
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown barcode symbology: {0}")]
pub struct ParseSymbologyError(pub String);

impl FromStr for Symbology {
    type Err = ParseSymbologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Separators are optional: "upc_a", "upc-a" and "upca" are the same name.
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        Symbology::ALL
            .into_iter()
            .find(|sym| sym.as_str().replace('_', "") == normalized)
            .ok_or_else(|| ParseSymbologyError(s.to_string()))
    }
}

/// A single reading produced by the decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedCode {
    pub symbology: Symbology,
    pub payload: String,
}

impl DecodedCode {
    pub fn new(symbology: Symbology, payload: impl Into<String>) -> Self {
        Self {
            symbology,
            payload: payload.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbology_parses_camera_names() {
        assert_eq!("ean13".parse::<Symbology>(), Ok(Symbology::Ean13));
        assert_eq!("UPC_E".parse::<Symbology>(), Ok(Symbology::UpcE));
        assert_eq!("upca".parse::<Symbology>(), Ok(Symbology::UpcA));
        assert_eq!("code-128".parse::<Symbology>(), Ok(Symbology::Code128));
        assert!("pdf417".parse::<Symbology>().is_err());
    }
}
