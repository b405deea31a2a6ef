//! Scan-trigger state machine
//!
//! A scan is started by an explicit user action ([`ScanTrigger::arm`]). While
//! armed, the first reading reported by the [`DecodedCodeSource`] is forwarded
//! as a [`ScanEvent::Decoded`] and the trigger returns to idle; any further
//! readings are ignored until the next arm. If nothing is decoded before the
//! scan timeout, the trigger returns to idle and raises
//! [`ScanEvent::NoBarcodeDetected`].
//!
//! [`ScanMachine`] holds the synchronous transitions. [`ScanTrigger`] wraps it
//! for use on a tokio runtime and owns the timeout task of the live session.

mod machine;
mod source;
mod trigger;

pub use machine::{ArmOutcome, ScanMachine, ScanPhase, ScanSession, ScanState, SessionId, TimeoutHandle};
pub use source::{ArmSwitch, DecodedCodeSource};
pub use trigger::ScanTrigger;

use std::time::Duration;

use crate::DecodedCode;

/// Scan timeout used when none is configured
pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_millis(3000);

/// Advisory shown when a scan times out
pub const NO_BARCODE_NOTICE: &str = "No barcode detected. Please adjust position and try again.";

/// Terminal outcome of one arming
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// The first reading of the arming, to be resolved
    Decoded(DecodedCode),
    /// The timeout elapsed without a reading
    NoBarcodeDetected,
}

impl ScanEvent {
    /// User-visible notice for this event, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ScanEvent::Decoded(_) => None,
            ScanEvent::NoBarcodeDetected => Some(NO_BARCODE_NOTICE),
        }
    }
}
