//! Panel window delegate.
//!
//! An NSObject subclass holding a raw pointer back to the controller. The
//! three delegate callbacks that matter are forwarded: close requests,
//! key-window resignation (outside click / Escape) and resizes (the arrow
//! must stay aimed at the status item).

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::platform::macos::controller::PopupController;
use crate::platform::macos::ffi::bridge::{id, msg_send, ObjectExt};

const CLASS_NAME: &std::ffi::CStr = c"MenupopPanelDelegate";

/// Register the delegate class (once) and create an instance pointing at
/// `controller`.
///
/// # Safety
/// - `controller` must stay valid until [`clear_controller`] is called.
/// - Must be called from the main thread.
pub unsafe fn create_panel_delegate(controller: *mut PopupController) -> id {
    let class = ensure_class();

    let delegate: id = msg_send![class, new];
    (*delegate).store_ivar::<*mut std::ffi::c_void>("_controller", controller.cast());
    delegate
}

/// Detach the delegate from its controller; later callbacks become no-ops.
///
/// # Safety
/// `delegate` must be a valid MenupopPanelDelegate. Main thread only.
pub unsafe fn clear_controller(delegate: id) {
    (*delegate).store_ivar::<*mut std::ffi::c_void>("_controller", std::ptr::null_mut());
}

unsafe fn ensure_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(CLASS_NAME) {
        return cls;
    }

    let superclass = AnyClass::get(c"NSObject").unwrap();
    let mut builder = ClassBuilder::new(CLASS_NAME, superclass).unwrap();

    builder.add_ivar::<*mut std::ffi::c_void>(c"_controller");

    builder.add_method(
        sel!(windowWillClose:),
        window_will_close as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(windowDidResignKey:),
        window_did_resign_key as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(windowDidResize:),
        window_did_resize as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

unsafe fn controller_of(this: &AnyObject) -> *mut PopupController {
    let raw = *this.load_ivar::<*mut std::ffi::c_void>("_controller");
    raw.cast()
}

unsafe extern "C-unwind" fn window_will_close(this: &AnyObject, _cmd: Sel, _notification: id) {
    let controller = controller_of(this);
    if !controller.is_null() {
        (*controller).handle_window_will_close();
    }
}

unsafe extern "C-unwind" fn window_did_resign_key(this: &AnyObject, _cmd: Sel, _notification: id) {
    let controller = controller_of(this);
    if !controller.is_null() {
        (*controller).handle_window_did_resign_key();
    }
}

unsafe extern "C-unwind" fn window_did_resize(this: &AnyObject, _cmd: Sel, _notification: id) {
    let controller = controller_of(this);
    if !controller.is_null() {
        (*controller).handle_window_did_resize();
    }
}
