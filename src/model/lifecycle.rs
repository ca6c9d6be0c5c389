//! Open/close lifecycle state machine (pure Rust, no FFI).
//!
//! The popup's visible life is `Closed → Opening → Open → Closing → Closed`.
//! Both animations can be interrupted: closing mid-open must suppress the
//! open-completion side effects, and reopening mid-close must suppress the
//! close-completion teardown. The `finish_*` transitions return whether the
//! completion may proceed, so the interrupted branch becomes a plain `if`.

/// Where the popup currently is in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    /// Panel ordered out, nothing on screen.
    Closed,
    /// Fade-in running; outside-click close triggers are suppressed.
    Opening,
    /// Fully open, panel is the key window.
    Open,
    /// Fade-out running; the panel is still on screen.
    Closing,
}

/// Tracks the popup phase and arbitrates interrupted animations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupLifecycle {
    phase: PopupPhase,
}

impl Default for PopupLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupLifecycle {
    pub fn new() -> Self {
        Self {
            phase: PopupPhase::Closed,
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    /// Counts as open from the moment opening starts until closing starts.
    /// The status button stays highlighted exactly while this is true.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, PopupPhase::Opening | PopupPhase::Open)
    }

    /// True during the fade-in. Key-window resignation while opening must
    /// not close the popup (opening from an inactive space briefly loses
    /// key status).
    pub fn is_opening(&self) -> bool {
        self.phase == PopupPhase::Opening
    }

    /// The panel is on screen: open, or still fading out.
    pub fn is_visible(&self) -> bool {
        self.phase != PopupPhase::Closed
    }

    /// Start opening. Valid from any phase; an interrupted close simply
    /// becomes an open.
    pub fn begin_open(&mut self) {
        self.phase = PopupPhase::Opening;
    }

    /// Open animation finished. Returns `false` when a close interleaved,
    /// in which case the caller must skip its `did_open` side effects.
    pub fn finish_open(&mut self) -> bool {
        if self.phase == PopupPhase::Opening {
            self.phase = PopupPhase::Open;
            true
        } else {
            false
        }
    }

    /// Start closing. Valid from any phase; closing mid-open cancels the
    /// open.
    pub fn begin_close(&mut self) {
        self.phase = PopupPhase::Closing;
    }

    /// Close animation finished. Returns `false` when a reopen interleaved,
    /// in which case the caller must not order the panel out.
    pub fn finish_close(&mut self) -> bool {
        if self.phase == PopupPhase::Closing {
            self.phase = PopupPhase::Closed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_open_close_cycle() {
        let mut lc = PopupLifecycle::new();
        assert_eq!(lc.phase(), PopupPhase::Closed);
        assert!(!lc.is_open());
        assert!(!lc.is_visible());

        lc.begin_open();
        assert!(lc.is_open());
        assert!(lc.is_opening());
        assert!(lc.is_visible());

        assert!(lc.finish_open());
        assert!(lc.is_open());
        assert!(!lc.is_opening());

        lc.begin_close();
        assert!(!lc.is_open());
        assert!(lc.is_visible());

        assert!(lc.finish_close());
        assert_eq!(lc.phase(), PopupPhase::Closed);
        assert!(!lc.is_visible());
    }

    #[test]
    fn close_during_open_animation_suppresses_completion() {
        let mut lc = PopupLifecycle::new();
        lc.begin_open();
        lc.begin_close();
        // Open animation completion fires after the interleaved close
        assert!(!lc.finish_open());
        assert_eq!(lc.phase(), PopupPhase::Closing);
        assert!(lc.finish_close());
    }

    #[test]
    fn reopen_during_close_animation_suppresses_teardown() {
        let mut lc = PopupLifecycle::new();
        lc.begin_open();
        lc.finish_open();
        lc.begin_close();
        lc.begin_open();
        // Close animation completion fires after the interleaved open
        assert!(!lc.finish_close());
        assert!(lc.is_open());
        assert!(lc.finish_open());
    }
}
