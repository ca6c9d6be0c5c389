//! Input handling module.
//!
//! - status_click.rs: resolving mouse events to (possibly replicated)
//!   status items and measuring the status button on screen
//! - monitors.rs: local NSEvent monitors feeding clicks to the controller

pub mod monitors;
pub mod status_click;

pub use monitors::{install_click_monitors, remove_monitor};
