//! Wires scan events to product resolution
//!
//! Every [`ScanEvent::Decoded`] is resolved exactly once; timeouts are passed
//! through as advisory outcomes.

use tokio::sync::mpsc;

use crate::product::{ProductDatabase, ProductResolver};
use crate::scanner::ScanEvent;
use crate::{DecodedCode, DietaryProfile, ResolvedProduct};

/// What the caller should present for one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Resolved {
        code: DecodedCode,
        product: ResolvedProduct,
    },
    /// Lookup failed or the product is unknown
    NoData { code: DecodedCode },
    /// The scan timed out; carries the notice to show
    NoBarcodeDetected { notice: &'static str },
}

/// Resolve one scan event
pub async fn handle_event<D: ProductDatabase>(
    event: ScanEvent,
    resolver: &ProductResolver<D>,
    profile: &DietaryProfile,
) -> ScanOutcome {
    match event {
        ScanEvent::Decoded(code) => match resolver.resolve(&code.payload, profile).await {
            Some(product) => ScanOutcome::Resolved { code, product },
            None => ScanOutcome::NoData { code },
        },
        ScanEvent::NoBarcodeDetected => ScanOutcome::NoBarcodeDetected {
            notice: crate::scanner::NO_BARCODE_NOTICE,
        },
    }
}

/// Process events until every sender is gone, reporting each outcome
pub async fn drive<D, F>(
    mut events: mpsc::UnboundedReceiver<ScanEvent>,
    resolver: &ProductResolver<D>,
    profile: &DietaryProfile,
    mut on_outcome: F,
) where
    D: ProductDatabase,
    F: FnMut(ScanOutcome),
{
    while let Some(event) = events.recv().await {
        on_outcome(handle_event(event, resolver, profile).await);
    }
    tracing::debug!("Scan event channel closed");
}
