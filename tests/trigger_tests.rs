//! Tests for click attribution and modifier classification.

use menupop::events::modifiers::{is_reorder_click, FLAG_COMMAND, FLAG_OPTION, FLAG_SHIFT};
use menupop::events::trigger::is_long_click;
use menupop::model::constants::{LONG_CLICK_SECONDS, SYNTHETIC_EVENT_NUMBER};
use menupop::{ClickInfo, PopupModifiers};

fn click_on_our_item() -> ClickInfo {
    ClickInfo {
        same_button: true,
        same_window: true,
        event_number: 7,
        modifier_flags: 0,
        is_mouse_down: true,
    }
}

// === Trigger decisions ===

#[test]
fn plain_click_on_status_item_triggers() {
    assert!(click_on_our_item().should_trigger());
}

#[test]
fn command_click_never_triggers() {
    // Command-click is the OS drag-to-reorder gesture
    let info = ClickInfo {
        modifier_flags: FLAG_COMMAND,
        ..click_on_our_item()
    };
    assert!(!info.should_trigger());
}

#[test]
fn command_with_other_modifiers_still_triggers() {
    let info = ClickInfo {
        modifier_flags: FLAG_COMMAND | FLAG_OPTION,
        ..click_on_our_item()
    };
    assert!(info.should_trigger());
}

#[test]
fn command_mouse_up_still_triggers() {
    // Only the mouse-down half of the gesture is a reorder drag
    let info = ClickInfo {
        modifier_flags: FLAG_COMMAND,
        is_mouse_down: false,
        ..click_on_our_item()
    };
    assert!(info.should_trigger());
}

#[test]
fn shift_and_option_clicks_trigger() {
    for flags in [FLAG_SHIFT, FLAG_OPTION, FLAG_SHIFT | FLAG_OPTION] {
        let info = ClickInfo {
            modifier_flags: flags,
            ..click_on_our_item()
        };
        assert!(info.should_trigger());
    }
}

#[test]
fn synthesized_menu_manager_click_never_triggers() {
    let info = ClickInfo {
        event_number: SYNTHETIC_EVENT_NUMBER,
        ..click_on_our_item()
    };
    assert!(!info.should_trigger());
}

#[test]
fn click_on_replica_that_does_not_resolve_to_us_never_triggers() {
    let foreign_button = ClickInfo {
        same_button: false,
        ..click_on_our_item()
    };
    let foreign_window = ClickInfo {
        same_window: false,
        ..click_on_our_item()
    };
    assert!(!foreign_button.should_trigger());
    assert!(!foreign_window.should_trigger());
}

#[test]
fn reorder_detection_requires_exactly_command() {
    assert!(is_reorder_click(FLAG_COMMAND, true));
    assert!(!is_reorder_click(FLAG_COMMAND | FLAG_SHIFT, true));
    assert!(!is_reorder_click(0, true));
    assert!(!is_reorder_click(FLAG_COMMAND, false));
}

// === Long-click close ===

#[test]
fn quick_release_is_not_a_long_click() {
    assert!(!is_long_click(10.0, 10.1));
}

#[test]
fn held_press_is_a_long_click() {
    assert!(is_long_click(10.0, 10.0 + LONG_CLICK_SECONDS + 0.01));
}

#[test]
fn threshold_itself_is_not_a_long_click() {
    assert!(!is_long_click(10.0, 10.0 + LONG_CLICK_SECONDS));
}

// === Modifier classification ===

#[test]
fn modifiers_map_to_popup_keys() {
    assert_eq!(PopupModifiers::from_flags(0), PopupModifiers::None);
    assert_eq!(PopupModifiers::from_flags(FLAG_SHIFT), PopupModifiers::Shift);
    assert_eq!(
        PopupModifiers::from_flags(FLAG_OPTION),
        PopupModifiers::Option
    );
    assert_eq!(
        PopupModifiers::from_flags(FLAG_SHIFT | FLAG_OPTION),
        PopupModifiers::ShiftOption
    );
}

#[test]
fn unrelated_modifiers_classify_as_none() {
    assert_eq!(
        PopupModifiers::from_flags(FLAG_COMMAND),
        PopupModifiers::None
    );
}
