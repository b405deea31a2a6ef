//! Core domain types for foodscan

mod code;
mod product;
mod profile;
mod verdict;

pub use code::{DecodedCode, ParseSymbologyError, Symbology};
pub use product::{NormalizedProduct, ResolvedProduct};
pub use profile::DietaryProfile;
pub use verdict::{AnalysisVerdict, VerdictStatus};
