//! Image analysis command implementation

use anyhow::Result;

use foodscan::analysis::analyze_image_label;

use super::output;

pub async fn analyze_image_command(uri: &str) -> Result<()> {
    let analysis = analyze_image_label(uri).await;
    println!("{}", uri);
    println!("  Ingredients: {}", analysis.ingredient_text);
    output::print_verdict(&analysis.verdict);
    Ok(())
}
