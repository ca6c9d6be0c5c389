//! Popup configuration (pure Rust, no FFI).

use super::constants::*;
use crate::clamp;
use crate::geometry::Size;

/// Appearance and timing of the popup panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupConfig {
    /// Fade-in duration in seconds.
    pub open_duration: f64,
    /// Fade-out duration in seconds.
    pub close_duration: f64,
    /// Size of the arrow pointing at the status item.
    pub arrow_size: Size,
    /// Inset between the chrome and the embedded content, in points.
    pub content_inset: f64,
    /// Corner radius of the panel background, in points.
    pub corner_radius: f64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            open_duration: DEFAULT_OPEN_DURATION,
            close_duration: DEFAULT_CLOSE_DURATION,
            arrow_size: Size::new(DEFAULT_ARROW_WIDTH, DEFAULT_ARROW_HEIGHT),
            content_inset: DEFAULT_CONTENT_INSET,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl PopupConfig {
    /// Validates and clamps all values to valid ranges.
    ///
    /// Non-finite values fall back to the defaults; negative values clamp
    /// to zero, durations additionally to [`MAX_ANIMATION_SECONDS`].
    pub fn validate(&mut self) {
        self.open_duration = sanitize_duration(self.open_duration, DEFAULT_OPEN_DURATION);
        self.close_duration = sanitize_duration(self.close_duration, DEFAULT_CLOSE_DURATION);
        self.arrow_size.width = sanitize_length(self.arrow_size.width, DEFAULT_ARROW_WIDTH);
        self.arrow_size.height = sanitize_length(self.arrow_size.height, DEFAULT_ARROW_HEIGHT);
        self.content_inset = sanitize_length(self.content_inset, DEFAULT_CONTENT_INSET);
        self.corner_radius = sanitize_length(self.corner_radius, DEFAULT_CORNER_RADIUS);
    }
}

fn sanitize_duration(value: f64, default: f64) -> f64 {
    if !value.is_finite() {
        return default;
    }
    clamp(value, 0.0, MAX_ANIMATION_SECONDS)
}

fn sanitize_length(value: f64, default: f64) -> f64 {
    if !value.is_finite() {
        return default;
    }
    value.max(0.0)
}
