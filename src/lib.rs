#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Menu-bar popup panel for macOS.
//!
//! A status item in the system menu bar toggles a borderless, non-activating
//! floating panel anchored beneath it, drawn as a rounded rectangle with an
//! arrow pointing at the item. Caller-supplied content is embedded inside
//! the chrome at a configurable inset.
//!
//! Pure logic (placement geometry, open/close lifecycle, click attribution,
//! configuration) lives in FFI-free modules so tests can run as normal
//! integration tests on any platform. All Cocoa glue is confined to
//! [`platform::macos`].

pub mod events;
pub mod geometry;
pub mod model;
pub mod platform;

// Re-export the pure types for convenience
pub use events::{ClickInfo, PopupModifiers};
pub use geometry::{Point, Rect, Size};
pub use model::config::PopupConfig;
pub use model::lifecycle::{PopupLifecycle, PopupPhase};

#[cfg(target_os = "macos")]
pub use platform::macos::controller::PopupController;

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
