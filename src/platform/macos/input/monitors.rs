//! Local NSEvent monitors for status-item clicks.
//!
//! The status button itself never receives an action: every left-mouse
//! press and release in the application is intercepted here and handed to
//! the controller, which decides whether the event addresses its status
//! item (replicas included). Returning `nil` from the handler swallows the
//! event; returning it unchanged lets it continue to the normal dispatch.

use block2::RcBlock;

use crate::platform::macos::controller::PopupController;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};

// NSEvent masks: leftDown=1<<1, leftUp=1<<2
const LEFT_DOWN_MASK: u64 = 1 << 1;
const LEFT_UP_MASK: u64 = 1 << 2;

/// Install the left-mouse-down/up monitors feeding `controller`.
///
/// Returns the two monitor objects; pass them to [`remove_monitor`] at
/// teardown.
///
/// # Safety
/// - `controller` must stay valid until both monitors are removed.
/// - Must be called from the main thread.
pub unsafe fn install_click_monitors(controller: *mut PopupController) -> (id, id) {
    let cls = get_class("NSEvent");

    let down_target = controller;
    let on_down = RcBlock::new(move |event: id| -> id {
        unsafe { (*down_target).handle_mouse_down(event) }
    });
    let down_monitor: id =
        msg_send![cls, addLocalMonitorForEventsMatchingMask: LEFT_DOWN_MASK, handler: &*on_down];

    let up_target = controller;
    let on_up = RcBlock::new(move |event: id| -> id {
        unsafe { (*up_target).handle_mouse_up(event) }
    });
    let up_monitor: id =
        msg_send![cls, addLocalMonitorForEventsMatchingMask: LEFT_UP_MASK, handler: &*on_up];

    (down_monitor, up_monitor)
}

/// Remove a previously installed event monitor. `nil` is ignored.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn remove_monitor(monitor: id) {
    if monitor != nil {
        let _: () = msg_send![get_class("NSEvent"), removeMonitor: monitor];
    }
}
