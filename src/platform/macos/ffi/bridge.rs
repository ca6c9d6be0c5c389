//! Thin helpers over the objc2 runtime.
//!
//! Most of this crate talks to AppKit dynamically, through `msg_send!` with
//! raw object pointers. The aliases and helpers here keep that code
//! readable: `id`/`nil` for object pointers, class lookup by name, NSString
//! conversion in both directions, and an extension trait for instance
//! variable access on dynamically registered classes.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel, ClassType};

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

// Statically-typed AppKit classes; linking them also links the framework.
// Most call sites stay dynamic (get_class + msg_send).
pub use objc2_app_kit::{NSApplication, NSColor, NSEvent, NSScreen, NSView, NSWindow};

pub use block2::RcBlock;

/// Objective-C object pointer.
///
/// Prefer typed pointers like `&NSView` or `Retained<NSString>` when the
/// type is statically known; use `id` for dynamic/unknown types.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL YES (u8, not Rust bool).
pub const YES: Bool = Bool::YES;

/// Objective-C BOOL NO (u8, not Rust bool).
pub const NO: Bool = Bool::NO;

// === Window constants ===

/// kCGPopUpMenuWindowLevel: the level of context menus, well above normal
/// windows but below screen savers.
pub fn popup_window_level() -> i64 {
    101
}

// === Helper functions ===

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Create an NSString and return it as a raw id pointer.
///
/// The returned pointer is retained; for temporaries prefer [`nsstring`]
/// and `Retained::as_ptr`.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Read an NSString* into a Rust String. `nil` reads as the empty string.
///
/// # Safety
/// `s` must be nil or a valid NSString pointer.
pub unsafe fn string_from_nsstring(s: id) -> String {
    if s == nil {
        return String::new();
    }
    let ptr: *const std::ffi::c_char = msg_send![s, UTF8String];
    if ptr.is_null() {
        String::new()
    } else {
        std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

/// Class name of an object as a Rust String.
///
/// # Safety
/// `obj` must be a valid object pointer.
pub unsafe fn class_name(obj: id) -> String {
    let name: id = msg_send![obj, className];
    string_from_nsstring(name)
}

/// Get a class by name, panicking if not found (programmer error).
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

// === Object trait extensions for ivar access ===

use objc2::encode::Encode;

/// Extension trait for accessing instance variables on AnyObject.
///
/// Used with the dynamically registered classes in `ui/`; the ivar names
/// are fixed at class-registration time.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Load a mutable reference to an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar_mut<T: Encode>(&mut self, name: &str) -> &mut T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn load_ivar_mut<T: Encode>(&mut self, name: &str) -> &mut T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load_mut::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

// === Autorelease pool ===

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
