//! Pure application model: configuration and the open/close lifecycle.
//!
//! This module is pure Rust with no FFI dependencies, making it fully
//! testable on any platform.

pub mod config;
pub mod constants;
pub mod lifecycle;

pub use config::PopupConfig;
pub use lifecycle::{PopupLifecycle, PopupPhase};
