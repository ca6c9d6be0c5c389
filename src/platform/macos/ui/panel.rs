//! The popup panel.
//!
//! An NSPanel subclass configured as a borderless, non-activating floating
//! window at pop-up-menu level. It can become key so embedded controls
//! (search fields, buttons) receive input, and Escape resigns key status,
//! which the delegate turns into a close.

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use objc2::sel;

use block2::RcBlock;

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, popup_window_level, NSPoint, NSRect, NSSize, NO, YES,
};

const CLASS_NAME: &std::ffi::CStr = c"MenupopPanel";

// NSWindowStyleMaskNonactivatingPanel = 1 << 7
const STYLE_NONACTIVATING_PANEL: u64 = 1 << 7;
// NSBackingStoreBuffered = 2
const BACKING_BUFFERED: u64 = 2;

/// Register the panel class (once) and create a configured instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn register_and_create_panel() -> id {
    let class = ensure_class();

    let panel: id = msg_send![class, alloc];
    let content = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(0.0, 0.0));
    let panel: id = msg_send![
        panel,
        initWithContentRect: content,
        styleMask: STYLE_NONACTIVATING_PANEL,
        backing: BACKING_BUFFERED,
        defer: NO
    ];

    let _: () = msg_send![panel, setAcceptsMouseMovedEvents: YES];
    let _: () = msg_send![panel, setLevel: popup_window_level()];
    let _: () = msg_send![panel, setOpaque: NO];
    let clear: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![panel, setBackgroundColor: clear];
    let _: () = msg_send![panel, setHidesOnDeactivate: NO];
    let _: () = msg_send![panel, setHasShadow: YES];

    panel
}

/// Fade the panel's alpha to `alpha` over `duration` seconds, then run
/// `completion` on the main thread.
///
/// # Safety
/// `panel` must be a valid NSWindow pointer. Must be called from the main
/// thread.
pub unsafe fn fade_to(panel: id, alpha: f64, duration: f64, completion: impl Fn() + 'static) {
    let changes = RcBlock::new(move |context: id| unsafe {
        let _: () = msg_send![context, setDuration: duration];
        let animator: id = msg_send![panel, animator];
        let _: () = msg_send![animator, setAlphaValue: alpha];
    });
    let done = RcBlock::new(move || completion());

    let _: () = msg_send![
        get_class("NSAnimationContext"),
        runAnimationGroup: &*changes,
        completionHandler: &*done
    ];
}

unsafe fn ensure_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(CLASS_NAME) {
        return cls;
    }

    let superclass = AnyClass::get(c"NSPanel").unwrap();
    let mut builder = ClassBuilder::new(CLASS_NAME, superclass).unwrap();

    builder.add_method(
        sel!(canBecomeKeyWindow),
        can_become_key_window as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(cancelOperation:),
        cancel_operation as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

// Borderless windows refuse key status by default; embedded controls need it
unsafe extern "C-unwind" fn can_become_key_window(_this: &AnyObject, _cmd: Sel) -> Bool {
    Bool::YES
}

// Escape resigns key status; the delegate closes the popup in response
unsafe extern "C-unwind" fn cancel_operation(this: &AnyObject, _cmd: Sel, _sender: id) {
    let _: () = msg_send![this, resignKey];
}
