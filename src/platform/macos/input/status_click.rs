//! Resolving mouse events to status items.
//!
//! On inactive screens and spaces the system shows replicas of every status
//! item (`NSStatusItemReplicant`, an `NSStatusItem` subclass). Events land
//! on the replica's button and window, so both must be resolved back to the
//! real item before they can be compared with ours. The replica's
//! relationships are only reachable through key-value coding; lookups that
//! miss degrade to `nil`.

use crate::events::ClickInfo;
use crate::geometry::Rect;

use crate::platform::macos::ffi::bridge::{
    class_name, id, msg_send, nil, nsstring, AnyObject, NSRect, Retained,
};

/// Status item (real or replicant) owning the window the event landed in,
/// or `nil` when the event is not on a status-bar window at all.
///
/// # Safety
/// `event` must be a valid NSEvent pointer. Must be called from the main
/// thread.
pub unsafe fn clicked_status_item(event: id) -> id {
    let window: id = msg_send![event, window];
    if window == nil {
        return nil;
    }

    // Status items live in windows with the private class NSStatusBarWindow
    let name = class_name(window);
    if !(name.starts_with("NSStatusBar") && name.ends_with("Window")) {
        return nil;
    }

    let key = nsstring("statusItem");
    let key_ptr = Retained::as_ptr(&key) as *mut AnyObject;
    msg_send![window, valueForKey: key_ptr]
}

/// Resolve a possibly-replicated status item to the real NSStatusItem.
///
/// # Safety
/// `item` must be nil or a valid NSStatusItem (or replicant) pointer.
pub unsafe fn real_item(item: id) -> id {
    if item == nil {
        return nil;
    }
    if class_name(item) == "NSStatusItem" {
        item
    } else {
        // A replicant points at the item it mirrors via "parentItem"
        let key = nsstring("parentItem");
        let key_ptr = Retained::as_ptr(&key) as *mut AnyObject;
        msg_send![item, valueForKey: key_ptr]
    }
}

/// Window actually hosting the item. For a replicant, `button.window` would
/// report the original item's window, so its own "window" property is used
/// instead.
///
/// # Safety
/// `item` must be nil or a valid NSStatusItem (or replicant) pointer.
pub unsafe fn real_window(item: id) -> id {
    if item == nil {
        return nil;
    }
    if class_name(item) == "NSStatusItem" {
        let button: id = msg_send![item, button];
        if button == nil {
            nil
        } else {
            msg_send![button, window]
        }
    } else {
        let key = nsstring("window");
        let key_ptr = Retained::as_ptr(&key) as *mut AnyObject;
        msg_send![item, valueForKey: key_ptr]
    }
}

/// Extract the comparison facts for [`ClickInfo`] from a mouse event.
///
/// `is_mouse_down` comes from the monitor that received the event; the
/// down- and up-monitors are registered with disjoint event masks.
///
/// # Safety
/// `event` must be a valid NSEvent pointer; `our_button` nil or a valid
/// NSStatusBarButton. Must be called from the main thread.
pub unsafe fn click_info(event: id, our_button: id, is_mouse_down: bool) -> ClickInfo {
    let clicked = clicked_status_item(event);
    let clicked_real = real_item(clicked);
    let clicked_button: id = if clicked_real == nil {
        nil
    } else {
        msg_send![clicked_real, button]
    };
    let clicked_window = real_window(clicked);

    let event_window: id = msg_send![event, window];
    let event_number: isize = msg_send![event, eventNumber];
    let modifier_flags: u64 = msg_send![event, modifierFlags];

    ClickInfo {
        same_button: our_button != nil && our_button == clicked_button,
        same_window: event_window != nil && event_window == clicked_window,
        event_number,
        modifier_flags,
        is_mouse_down,
    }
}

/// Status button frame in screen coordinates.
///
/// When `reference_window` is given (the window of the clicked, possibly
/// replicated item), the conversion uses that window's screen space, so the
/// popup opens on the screen that was actually clicked.
///
/// # Safety
/// `status_item` must be a valid NSStatusItem pointer; `reference_window`
/// nil or a valid NSWindow. Must be called from the main thread.
pub unsafe fn button_global_rect(status_item: id, reference_window: id) -> Option<Rect> {
    let button: id = msg_send![status_item, button];
    if button == nil {
        return None;
    }

    let frame: NSRect = msg_send![button, frame];
    let rect_in_window: NSRect = msg_send![button, convertRect: frame, toView: nil];

    let window: id = if reference_window != nil {
        reference_window
    } else {
        msg_send![button, window]
    };
    if window == nil {
        return None;
    }

    let on_screen: NSRect = msg_send![window, convertRectToScreen: rect_in_window];
    Some(Rect::new(
        on_screen.origin.x,
        on_screen.origin.y,
        frame.size.width,
        frame.size.height,
    ))
}
