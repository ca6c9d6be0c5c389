//! FFI helpers for talking to Cocoa through the objc2 runtime.

pub mod bridge;

pub use bridge::*;
