//! Async handle around the scan state machine

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

use super::machine::{ArmOutcome, ScanMachine, ScanPhase, SessionId, TimeoutHandle};
use super::source::DecodedCodeSource;
use super::{NO_BARCODE_NOTICE, ScanEvent};
use crate::DecodedCode;

/// Cloneable scan trigger driven from UI actions and decoder callbacks
///
/// Must be armed from within a tokio runtime, which runs the timeout task.
/// Dropping the last clone tears the trigger down.
pub struct ScanTrigger<S: DecodedCodeSource> {
    pub(super) machine: Arc<Mutex<ScanMachine<S>>>,
    events: mpsc::UnboundedSender<ScanEvent>,
    timeout: Duration,
}

impl<S: DecodedCodeSource> Clone for ScanTrigger<S> {
    fn clone(&self) -> Self {
        Self {
            machine: Arc::clone(&self.machine),
            events: self.events.clone(),
            timeout: self.timeout,
        }
    }
}

impl<S: DecodedCodeSource + 'static> ScanTrigger<S> {
    /// Create a trigger and the receiver for its scan events
    pub fn new(source: S, timeout: Duration) -> (Self, mpsc::UnboundedReceiver<ScanEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let trigger = Self {
            machine: Arc::new(Mutex::new(ScanMachine::new(source))),
            events,
            timeout,
        };
        (trigger, rx)
    }

    /// Start a scan. Ignored while a scan is live or after teardown.
    pub fn arm(&self) -> ArmOutcome {
        let Ok(mut machine) = self.machine.lock() else {
            return ArmOutcome::Ignored;
        };

        let outcome = machine.arm();
        if let ArmOutcome::Armed(id) = outcome {
            match self.spawn_timeout(id) {
                Some(handle) => {
                    machine.attach_timeout(id, handle);
                    info!("Scanning for a barcode ({} ms)", self.timeout.as_millis());
                }
                None => {
                    warn!("No tokio runtime to time the scan, cancelling session {}", id);
                    machine.cancel();
                    return ArmOutcome::Ignored;
                }
            }
        }
        outcome
    }

    /// Decoder callback. Returns `true` if the reading was forwarded.
    pub fn on_decoded(&self, code: DecodedCode) -> bool {
        let Ok(mut machine) = self.machine.lock() else {
            return false;
        };

        match machine.on_decoded(code) {
            Some(code) => {
                info!("Barcode detected: {} {}", code.symbology, code.payload);
                // Sent under the lock so events keep transition order.
                let _ = self.events.send(ScanEvent::Decoded(code));
                true
            }
            None => false,
        }
    }

    /// Abandon the live scan without an event
    pub fn cancel(&self) -> bool {
        self.machine.lock().map(|mut m| m.cancel()).unwrap_or(false)
    }

    /// Stop the trigger for good. Safe to call any number of times.
    pub fn teardown(&self) -> bool {
        self.machine.lock().map(|mut m| m.teardown()).unwrap_or(false)
    }

    pub fn phase(&self) -> ScanPhase {
        self.machine
            .lock()
            .map(|m| m.phase())
            .unwrap_or(ScanPhase::TornDown)
    }

    pub fn is_forwarding(&self) -> bool {
        self.machine
            .lock()
            .map(|m| m.is_forwarding())
            .unwrap_or(false)
    }

    /// Run `f` against the source, e.g. to inspect a test double
    pub fn with_source<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.machine.lock().ok().map(|m| f(m.source()))
    }

    fn spawn_timeout(&self, id: SessionId) -> Option<TimeoutHandle> {
        let runtime = tokio::runtime::Handle::try_current().ok()?;
        let machine = Arc::downgrade(&self.machine);
        let events = self.events.clone();
        let timeout = self.timeout;

        let task = runtime.spawn(async move {
            tokio::time::sleep(timeout).await;
            fire_timeout(&machine, &events, id);
        });
        Some(TimeoutHandle::new(task.abort_handle()))
    }
}

/// Deferred timeout callback; does nothing once the trigger is gone
fn fire_timeout<S: DecodedCodeSource>(
    machine: &Weak<Mutex<ScanMachine<S>>>,
    events: &mpsc::UnboundedSender<ScanEvent>,
    id: SessionId,
) {
    let Some(machine) = machine.upgrade() else {
        return;
    };
    let Ok(mut machine) = machine.lock() else {
        return;
    };

    if machine.on_timeout(id) {
        info!("{}", NO_BARCODE_NOTICE);
        let _ = events.send(ScanEvent::NoBarcodeDetected);
    }
}
