//! Platform-specific implementations.
//!
//! The popup is a macOS widget; only the pure model, geometry and event
//! modules build elsewhere. All Cocoa glue lives under [`macos`].

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
