//! Status-item click attribution.
//!
//! The system renders visual replicas of every status item on inactive
//! screens and spaces, and third-party menu-bar managers synthesize clicks
//! with a reserved event number. A mouse event only belongs to this status
//! item when the clicked item's *real* (non-replicated) button and window
//! both resolve to ours, and the event is neither synthetic nor the OS
//! drag-to-reorder gesture.

use super::modifiers::is_reorder_click;
use crate::model::constants::{LONG_CLICK_SECONDS, SYNTHETIC_EVENT_NUMBER};

/// Facts about a mouse event, extracted from `NSEvent` by the Cocoa layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickInfo {
    /// The clicked status item's resolved real button is our button.
    pub same_button: bool,
    /// The event's window is the clicked status item's real window.
    pub same_window: bool,
    /// The event's `eventNumber`.
    pub event_number: isize,
    /// Raw `NSEvent` modifier flags.
    pub modifier_flags: u64,
    /// Whether the event is a left-mouse-down (as opposed to a mouse-up).
    pub is_mouse_down: bool,
}

impl ClickInfo {
    /// Whether this event should toggle the popup.
    pub fn should_trigger(&self) -> bool {
        self.same_button
            && self.same_window
            && self.event_number != SYNTHETIC_EVENT_NUMBER
            && !is_reorder_click(self.modifier_flags, self.is_mouse_down)
    }
}

/// A press released after [`LONG_CLICK_SECONDS`] reads as "hold open,
/// release to close" rather than as the tail end of the opening click.
pub fn is_long_click(down_timestamp: f64, up_timestamp: f64) -> bool {
    up_timestamp - down_timestamp > LONG_CLICK_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::modifiers::FLAG_COMMAND;

    fn plain_click() -> ClickInfo {
        ClickInfo {
            same_button: true,
            same_window: true,
            event_number: 42,
            modifier_flags: 0,
            is_mouse_down: true,
        }
    }

    #[test]
    fn plain_click_triggers() {
        assert!(plain_click().should_trigger());
    }

    #[test]
    fn synthetic_event_number_never_triggers() {
        let info = ClickInfo {
            event_number: SYNTHETIC_EVENT_NUMBER,
            ..plain_click()
        };
        assert!(!info.should_trigger());
    }

    #[test]
    fn command_click_never_triggers() {
        let info = ClickInfo {
            modifier_flags: FLAG_COMMAND,
            ..plain_click()
        };
        assert!(!info.should_trigger());
    }

    #[test]
    fn foreign_button_or_window_never_triggers() {
        let other_button = ClickInfo {
            same_button: false,
            ..plain_click()
        };
        let other_window = ClickInfo {
            same_window: false,
            ..plain_click()
        };
        assert!(!other_button.should_trigger());
        assert!(!other_window.should_trigger());
    }
}
