//! Product resolution pipeline
//!
//! Turns a decoded barcode payload into a [`ResolvedProduct`]:
//!
//! 1. fetch the record from the remote product database ([`ProductDatabase`])
//! 2. normalize every field through its ordered fallback list
//! 3. evaluate the normalized product with the [`DietaryAnalyzer`]
//! 4. assemble the terminal record
//!
//! The fixture barcode short-circuits steps 2-3 with a predetermined record.
//!
//! Resolution never fails: transport errors, non-2xx responses, malformed
//! bodies, and "not found" all resolve to `None`.

mod database;
mod fixture;
mod normalize;
mod openfoodfacts;

pub use database::{LookupError, ProductDatabase, ProductResponse, RawIngredient, RawProduct};
pub use fixture::{FIXTURE_BARCODE, FIXTURE_IMAGE_URI, fixture_product, is_fixture};
pub use normalize::{DEFAULT_IMAGE_URI, INGREDIENTS_NOT_FOUND, UNKNOWN_PRODUCT_NAME, normalize};
pub use openfoodfacts::OpenFoodFactsClient;

use tracing::{info, warn};

use crate::analysis::DietaryAnalyzer;
use crate::{DietaryProfile, ResolvedProduct};

/// Resolves payloads against a product database
pub struct ProductResolver<D = OpenFoodFactsClient> {
    database: D,
    analyzer: DietaryAnalyzer,
}

impl<D: ProductDatabase> ProductResolver<D> {
    /// Create a resolver with the built-in diet rules
    pub fn new(database: D) -> Self {
        Self {
            database,
            analyzer: DietaryAnalyzer::default(),
        }
    }

    /// Replace the diet rules used for evaluation
    pub fn with_analyzer(mut self, analyzer: DietaryAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Resolve `payload` for `profile`. `None` means "no data available".
    pub async fn resolve(&self, payload: &str, profile: &DietaryProfile) -> Option<ResolvedProduct> {
        let payload = payload.trim();
        info!("Fetching data for barcode: {}", payload);

        let response = match self.database.fetch(payload).await {
            Ok(response) => Some(response),
            Err(e) => {
                warn!("Product lookup failed for {}: {}", payload, e);
                None
            }
        };

        if is_fixture(payload) {
            info!("Fixture barcode {} detected, returning fixture product", payload);
            let found = response.and_then(ProductResponse::into_found);
            return Some(fixture_product(found.as_ref()));
        }

        let Some(raw) = response.and_then(ProductResponse::into_found) else {
            info!("Product {} not found in product database", payload);
            return None;
        };

        let product = normalize(&raw);
        let verdict = self.analyzer.evaluate(&product, profile);
        info!(
            "Resolved {} as '{}': {}",
            payload, product.product_name, verdict.status
        );

        Some(ResolvedProduct::assemble(product, verdict))
    }
}

/// Look up a barcode against Open Food Facts with the built-in diet rules
pub async fn lookup_product(payload: &str, profile: &DietaryProfile) -> Option<ResolvedProduct> {
    ProductResolver::new(OpenFoodFactsClient::default())
        .resolve(payload, profile)
        .await
}
