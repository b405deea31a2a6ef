//! Synchronous scan state transitions

use tracing::debug;

use super::source::DecodedCodeSource;
use crate::DecodedCode;

/// Identifies one arming; deferred callbacks carry it to detect staleness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pending timeout of a session. Aborts the timer task when dropped.
#[derive(Debug)]
pub struct TimeoutHandle(tokio::task::AbortHandle);

impl TimeoutHandle {
    pub fn new(handle: tokio::task::AbortHandle) -> Self {
        Self(handle)
    }
}

impl Drop for TimeoutHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// The live arming
#[derive(Debug)]
pub struct ScanSession {
    id: SessionId,
    has_result: bool,
    timeout: Option<TimeoutHandle>,
}

impl ScanSession {
    fn new(id: SessionId) -> Self {
        Self {
            id,
            has_result: false,
            timeout: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn has_result(&self) -> bool {
        self.has_result
    }

    pub fn has_timeout(&self) -> bool {
        self.timeout.is_some()
    }
}

#[derive(Debug, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Armed(ScanSession),
}

/// Observable summary of the trigger state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Armed,
    TornDown,
}

/// Result of an arm request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmOutcome {
    Armed(SessionId),
    /// Already armed or torn down; nothing changed
    Ignored,
}

/// Scan state plus the source it controls
///
/// The source is armed exactly while a session without a result is live.
pub struct ScanMachine<S: DecodedCodeSource> {
    source: S,
    state: ScanState,
    next_session: u64,
    torn_down: bool,
}

impl<S: DecodedCodeSource> ScanMachine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ScanState::Idle,
            next_session: 0,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn phase(&self) -> ScanPhase {
        match (&self.state, self.torn_down) {
            (_, true) => ScanPhase::TornDown,
            (ScanState::Idle, false) => ScanPhase::Idle,
            (ScanState::Armed(_), false) => ScanPhase::Armed,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether a reading would be accepted right now
    pub fn is_forwarding(&self) -> bool {
        match &self.state {
            ScanState::Armed(session) => !self.torn_down && !session.has_result,
            ScanState::Idle => false,
        }
    }

    /// `Idle` → `Armed` with a fresh session
    pub fn arm(&mut self) -> ArmOutcome {
        if self.torn_down {
            debug!("Ignoring arm request after teardown");
            return ArmOutcome::Ignored;
        }
        if let ScanState::Armed(session) = &self.state {
            debug!("Ignoring arm request, session {} is live", session.id);
            return ArmOutcome::Ignored;
        }

        self.next_session += 1;
        let id = SessionId(self.next_session);
        self.state = ScanState::Armed(ScanSession::new(id));
        self.source.arm();
        debug!("Scan session {} armed", id);
        ArmOutcome::Armed(id)
    }

    /// Hand the timer of session `id` to the session.
    ///
    /// Returns `false` (and drops, thereby aborting, the handle) if `id` is no
    /// longer the live session.
    pub fn attach_timeout(&mut self, id: SessionId, handle: TimeoutHandle) -> bool {
        match &mut self.state {
            ScanState::Armed(session) if session.id == id && !session.has_result => {
                session.timeout = Some(handle);
                true
            }
            _ => false,
        }
    }

    /// Accept the first reading of the live session; ignore everything else
    pub fn on_decoded(&mut self, code: DecodedCode) -> Option<DecodedCode> {
        if !self.is_forwarding() {
            debug!("Ignoring {} reading while not forwarding", code.symbology);
            return None;
        }

        if let ScanState::Armed(session) = &mut self.state {
            session.has_result = true;
        }
        if let Some(session) = self.end_session() {
            debug!("Scan session {} accepted {} reading", session.id, code.symbology);
        }
        Some(code)
    }

    /// Timeout of session `id`. Returns `true` if it ended the live session.
    pub fn on_timeout(&mut self, id: SessionId) -> bool {
        match &self.state {
            ScanState::Armed(session) if session.id == id && !session.has_result && !self.torn_down => {
                self.end_session();
                debug!("Scan session {} timed out", id);
                true
            }
            _ => {
                debug!("Ignoring stale timeout for session {}", id);
                false
            }
        }
    }

    /// `Armed` → `Idle` without a result. Returns `true` if a session ended.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.state, ScanState::Idle) {
            return false;
        }
        self.end_session();
        true
    }

    /// Stop for good: abort any timer and disarm the source.
    ///
    /// Only the first call has an effect.
    pub fn teardown(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        self.state = ScanState::Idle;
        self.source.disarm();
        debug!("Scan trigger torn down");
        true
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Return to idle and disarm; the dropped session aborts its timer
    fn end_session(&mut self) -> Option<ScanSession> {
        let previous = std::mem::take(&mut self.state);
        self.source.disarm();
        match previous {
            ScanState::Armed(session) => Some(session),
            ScanState::Idle => None,
        }
    }
}

impl<S: DecodedCodeSource> Drop for ScanMachine<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
