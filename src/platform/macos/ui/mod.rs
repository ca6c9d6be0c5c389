//! UI components.
//!
//! - background.rs: the chrome view drawing the rounded rect and arrow
//! - panel.rs: the borderless, non-activating floating panel
//! - delegate.rs: the window delegate bridging back into the controller

pub mod background;
pub mod delegate;
pub mod panel;
