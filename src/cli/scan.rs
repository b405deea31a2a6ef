//! Scan command implementation
//!
//! Stands in for the camera screen: stdin lines arm the trigger and present
//! barcodes to the decoder, which only reports them while armed.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use foodscan::config::Config;
use foodscan::pipeline::{self, ScanOutcome};
use foodscan::product::{OpenFoodFactsClient, ProductResolver};
use foodscan::scanner::{ArmOutcome, ArmSwitch, ScanTrigger};
use foodscan::{DecodedCode, Symbology};

use super::output;

/// One stdin line, interpreted
#[derive(Debug, PartialEq, Eq)]
enum ScanInput {
    Arm,
    Present(DecodedCode),
    Cancel,
    Quit,
    Invalid(String),
}

fn parse_input(line: &str) -> ScanInput {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" | "scan" | "s" => return ScanInput::Arm,
        "cancel" | "c" => return ScanInput::Cancel,
        "quit" | "exit" | "q" => return ScanInput::Quit,
        _ => {}
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [payload] => ScanInput::Present(DecodedCode::new(Symbology::Ean13, *payload)),
        [symbology, payload] => match symbology.parse::<Symbology>() {
            Ok(symbology) => ScanInput::Present(DecodedCode::new(symbology, *payload)),
            Err(e) => ScanInput::Invalid(e.to_string()),
        },
        _ => ScanInput::Invalid(format!("Expected '<symbology> <payload>', got '{}'", line)),
    }
}

fn print_outcome(outcome: &ScanOutcome, json: bool) {
    match outcome {
        ScanOutcome::Resolved { product, .. } => {
            if let Err(e) = output::print_product(product, json) {
                eprintln!("Error: {:#}", e);
            }
        }
        ScanOutcome::NoData { code } => {
            debug!("No data for {} {}", code.symbology, code.payload);
            output::print_no_data(json);
        }
        ScanOutcome::NoBarcodeDetected { notice } => println!("{}", notice),
    }
}

/// Run an interactive scan session until stdin closes or the user quits
pub async fn scan_command(config_path: Option<&Path>, diets: &[String], json: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let profile = config.profile_with_overrides(diets);
    let analyzer = config.analyzer();
    super::warn_unknown_diets(&analyzer, &profile);

    let resolver =
        ProductResolver::new(OpenFoodFactsClient::new(&config.database)).with_analyzer(analyzer);

    let camera = ArmSwitch::new();
    let (trigger, events) = ScanTrigger::new(camera.clone(), config.scan_timeout());

    let worker = tokio::spawn(async move {
        pipeline::drive(events, &resolver, &profile, |outcome| {
            print_outcome(&outcome, json)
        })
        .await;
    });

    println!(
        "Press Enter (or type 'scan') to scan, then enter '<symbology> <payload>' or a bare barcode. 'cancel' stops a scan, 'quit' exits."
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_input(&line) {
            ScanInput::Arm => match trigger.arm() {
                ArmOutcome::Armed(_) => println!("Scanning..."),
                ArmOutcome::Ignored => println!("Already scanning."),
            },
            ScanInput::Present(code) => {
                // A disarmed camera reports nothing.
                if camera.is_armed() {
                    trigger.on_decoded(code);
                } else {
                    println!("Tap to scan first.");
                }
            }
            ScanInput::Cancel => {
                if trigger.cancel() {
                    println!("Scan cancelled.");
                }
            }
            ScanInput::Quit => break,
            ScanInput::Invalid(message) => eprintln!("{}", message),
        }
    }

    trigger.teardown();
    drop(trigger);
    worker.await.context("Scan worker failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_control_words() {
        assert_eq!(parse_input(""), ScanInput::Arm);
        assert_eq!(parse_input("  SCAN "), ScanInput::Arm);
        assert_eq!(parse_input("cancel"), ScanInput::Cancel);
        assert_eq!(parse_input("q"), ScanInput::Quit);
    }

    #[test]
    fn test_parse_barcodes() {
        assert_eq!(
            parse_input("8886467124723"),
            ScanInput::Present(DecodedCode::new(Symbology::Ean13, "8886467124723"))
        );
        assert_eq!(
            parse_input("upc_a 012345678905"),
            ScanInput::Present(DecodedCode::new(Symbology::UpcA, "012345678905"))
        );
        assert!(matches!(parse_input("pdf417 123"), ScanInput::Invalid(_)));
        assert!(matches!(parse_input("qr a b"), ScanInput::Invalid(_)));
    }
}
