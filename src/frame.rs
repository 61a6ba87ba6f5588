//! Bookkeeping for a repaint loop driven by host frame callbacks.
//!
//! The browser scheduler in `web::frame` owns the actual callbacks; this type
//! decides when to request, cancel and honour them so the start/stop rules can
//! be checked without a browser.

/// Handle returned by the host when a callback is requested.
pub type FrameHandle = i32;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoopState {
    running: bool,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl LoopState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frame callbacks honoured since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns `true` when the caller must request the first callback.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Returns the pending handle the caller must cancel, if any.
    pub fn stop(&mut self) -> Option<FrameHandle> {
        self.running = false;
        self.pending.take()
    }

    /// Record the handle of a freshly requested callback.
    pub fn scheduled(&mut self, handle: FrameHandle) {
        if self.running {
            self.pending = Some(handle);
        }
    }

    /// Called when a callback fires. Returns `false` if the loop was stopped
    /// in the meantime and the frame must be dropped.
    pub fn on_callback(&mut self) -> bool {
        self.pending = None;
        if !self.running {
            return false;
        }
        self.frames += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_idempotent() {
        let mut state = LoopState::new();
        assert!(state.start());
        assert!(!state.start());
        assert!(state.is_running());
    }

    #[test]
    fn stop_hands_back_pending_handle() {
        let mut state = LoopState::new();
        state.start();
        state.scheduled(42);
        assert_eq!(state.stop(), Some(42));
        assert_eq!(state.pending(), None);
        assert_eq!(state.stop(), None);
    }

    #[test]
    fn callbacks_after_stop_are_dropped() {
        let mut state = LoopState::new();
        state.start();
        state.scheduled(1);
        assert!(state.on_callback());
        state.scheduled(2);
        state.stop();
        assert!(!state.on_callback());
        assert_eq!(state.frames(), 1);
    }

    #[test]
    fn scheduling_while_stopped_is_ignored() {
        let mut state = LoopState::new();
        state.scheduled(9);
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn restart_after_stop() {
        let mut state = LoopState::new();
        state.start();
        state.stop();
        assert!(state.start());
        assert!(state.on_callback());
    }
}
