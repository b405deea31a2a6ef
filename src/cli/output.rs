//! Terminal rendering of results

use anyhow::{Context, Result};

use foodscan::{AnalysisVerdict, ResolvedProduct};

pub const NO_DATA_MESSAGE: &str = "No product data available.";

pub fn print_product(product: &ResolvedProduct, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(product).context("Failed to serialize product")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", product.product.product_name);
    print_verdict(&product.verdict);
    println!("  Ingredients: {}", product.product.ingredient_text);
    println!("  Image:       {}", product.product.image_uri);
    if product.product.nutrition_image_uri != product.product.image_uri {
        println!("  Nutrition:   {}", product.product.nutrition_image_uri);
    }
    Ok(())
}

pub fn print_verdict(verdict: &AnalysisVerdict) {
    println!(
        "  Verdict:     {} (health score {}/100)",
        verdict.status, verdict.health_score
    );
    println!("  Reason:      {}", verdict.reason);
    println!("  Harmful:     {}", verdict.harmful_ingredients);
}

pub fn print_no_data(json: bool) {
    if json {
        println!("null");
    } else {
        println!("{}", NO_DATA_MESSAGE);
    }
}
