//! Event helpers: modifier classification and status-item click attribution.
//!
//! These modules are pure Rust with no FFI dependencies. The Cocoa layer
//! extracts the relevant facts from `NSEvent` and feeds them in as plain
//! values, so the decision logic is fully testable.

pub mod modifiers;
pub mod trigger;

pub use modifiers::PopupModifiers;
pub use trigger::ClickInfo;
