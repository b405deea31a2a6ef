//! Lookup command implementation

use anyhow::Result;
use std::path::Path;

use foodscan::config::Config;
use foodscan::product::{OpenFoodFactsClient, ProductResolver};

use super::output;

/// Resolve one barcode and print the verdict
pub async fn lookup_command(
    config_path: Option<&Path>,
    barcode: &str,
    diets: &[String],
    json: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let profile = config.profile_with_overrides(diets);
    let analyzer = config.analyzer();
    super::warn_unknown_diets(&analyzer, &profile);

    let resolver =
        ProductResolver::new(OpenFoodFactsClient::new(&config.database)).with_analyzer(analyzer);

    match resolver.resolve(barcode, &profile).await {
        Some(product) => output::print_product(&product, json)?,
        None => output::print_no_data(json),
    }

    Ok(())
}
