//! Configuration constants and default values.

// === Animation Defaults ===

/// Default fade-in duration in seconds.
pub const DEFAULT_OPEN_DURATION: f64 = 0.15;

/// Default fade-out duration in seconds.
pub const DEFAULT_CLOSE_DURATION: f64 = 0.2;

// === Chrome Defaults ===

/// Default arrow width in points.
pub const DEFAULT_ARROW_WIDTH: f64 = 12.0;

/// Default arrow height in points.
pub const DEFAULT_ARROW_HEIGHT: f64 = 8.0;

/// Default inset between the chrome and the embedded content, in points.
pub const DEFAULT_CONTENT_INSET: f64 = 1.0;

/// Default corner radius of the panel background, in points.
pub const DEFAULT_CORNER_RADIUS: f64 = 6.0;

// === Validation Limits ===

/// Upper bound for animation durations in seconds.
pub const MAX_ANIMATION_SECONDS: f64 = 5.0;

// === Click Classification ===

/// Event number carried by clicks synthesized by third-party menu-bar
/// management tools. Such clicks must never toggle the popup.
pub const SYNTHETIC_EVENT_NUMBER: isize = 1337;

/// A press held longer than this closes the popup on release
/// (press, hold, release-to-close).
pub const LONG_CLICK_SECONDS: f64 = 0.35;
