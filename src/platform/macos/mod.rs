//! macOS implementation using Cocoa/AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI helpers over the objc2 runtime
//! - UI components (the panel, its chrome view, the window delegate)
//! - Input handling (NSEvent monitors, status-item click resolution)
//! - The popup controller tying everything together

pub mod controller;
pub mod ffi;
pub mod input;
pub mod ui;

// Re-export the public surface
pub use controller::PopupController;
pub use ffi::bridge;
