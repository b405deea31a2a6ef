//! The decoder capability the trigger arms and disarms

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A decoder that reports readings only while armed.
///
/// Readings are delivered by calling [`super::ScanTrigger::on_decoded`];
/// the trigger guards against readings that arrive while disarmed.
pub trait DecodedCodeSource: Send {
    /// Start reporting readings
    fn arm(&mut self);

    /// Stop reporting readings. Must tolerate repeated calls.
    fn disarm(&mut self);
}

impl<S: DecodedCodeSource + ?Sized> DecodedCodeSource for Box<S> {
    fn arm(&mut self) {
        (**self).arm();
    }

    fn disarm(&mut self) {
        (**self).disarm();
    }
}

/// A shared flag a decoder loop can poll before reporting
#[derive(Debug, Clone, Default)]
pub struct ArmSwitch {
    armed: Arc<AtomicBool>,
}

impl ArmSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}

impl DecodedCodeSource for ArmSwitch {
    fn arm(&mut self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    fn disarm(&mut self) {
        self.armed.store(false, Ordering::SeqCst);
    }
}
