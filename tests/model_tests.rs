//! Tests for the model layer (PopupConfig, PopupLifecycle).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation.
#![allow(clippy::field_reassign_with_default)]

use menupop::model::constants::*;
use menupop::{PopupConfig, PopupLifecycle, PopupPhase, Size};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Config Default Tests ===

#[test]
fn config_default_durations() {
    let config = PopupConfig::default();
    assert!(approx_eq(config.open_duration, DEFAULT_OPEN_DURATION));
    assert!(approx_eq(config.close_duration, DEFAULT_CLOSE_DURATION));
}

#[test]
fn config_default_chrome() {
    let config = PopupConfig::default();
    assert!(approx_eq(config.arrow_size.width, DEFAULT_ARROW_WIDTH));
    assert!(approx_eq(config.arrow_size.height, DEFAULT_ARROW_HEIGHT));
    assert!(approx_eq(config.content_inset, DEFAULT_CONTENT_INSET));
    assert!(approx_eq(config.corner_radius, DEFAULT_CORNER_RADIUS));
}

// === Config Validation Tests ===

#[test]
fn validate_clamps_negative_duration_to_zero() {
    let mut config = PopupConfig::default();
    config.open_duration = -1.0;
    config.validate();
    assert!(approx_eq(config.open_duration, 0.0));
}

#[test]
fn validate_clamps_excessive_duration() {
    let mut config = PopupConfig::default();
    config.close_duration = 60.0;
    config.validate();
    assert!(approx_eq(config.close_duration, MAX_ANIMATION_SECONDS));
}

#[test]
fn validate_replaces_non_finite_duration_with_default() {
    let mut config = PopupConfig::default();
    config.open_duration = f64::NAN;
    config.validate();
    assert!(approx_eq(config.open_duration, DEFAULT_OPEN_DURATION));
}

#[test]
fn validate_clamps_negative_lengths_to_zero() {
    let mut config = PopupConfig::default();
    config.arrow_size = Size::new(-5.0, -3.0);
    config.content_inset = -2.0;
    config.corner_radius = -1.0;
    config.validate();
    assert!(approx_eq(config.arrow_size.width, 0.0));
    assert!(approx_eq(config.arrow_size.height, 0.0));
    assert!(approx_eq(config.content_inset, 0.0));
    assert!(approx_eq(config.corner_radius, 0.0));
}

#[test]
fn validate_keeps_values_in_range() {
    let mut config = PopupConfig::default();
    config.open_duration = 0.3;
    config.arrow_size = Size::new(20.0, 10.0);
    config.validate();
    assert!(approx_eq(config.open_duration, 0.3));
    assert!(approx_eq(config.arrow_size.width, 20.0));
    assert!(approx_eq(config.arrow_size.height, 10.0));
}

#[test]
fn zero_duration_is_valid() {
    let mut config = PopupConfig::default();
    config.open_duration = 0.0;
    config.validate();
    assert!(approx_eq(config.open_duration, 0.0));
}

// === Lifecycle Tests ===

/// Run the toggle decision the way the controller does.
fn toggle(lc: &mut PopupLifecycle) {
    if lc.is_open() {
        lc.begin_close();
        lc.finish_close();
    } else {
        lc.begin_open();
        lc.finish_open();
    }
}

#[test]
fn toggling_twice_returns_to_closed() {
    let mut lc = PopupLifecycle::new();
    toggle(&mut lc);
    toggle(&mut lc);
    assert_eq!(lc.phase(), PopupPhase::Closed);
}

#[test]
fn toggling_twice_returns_to_open() {
    let mut lc = PopupLifecycle::new();
    lc.begin_open();
    lc.finish_open();

    toggle(&mut lc);
    toggle(&mut lc);
    assert_eq!(lc.phase(), PopupPhase::Open);
}

#[test]
fn opening_counts_as_open() {
    let mut lc = PopupLifecycle::new();
    lc.begin_open();
    assert!(lc.is_open());
    assert!(lc.is_opening());
}

#[test]
fn closing_counts_as_visible_but_not_open() {
    let mut lc = PopupLifecycle::new();
    lc.begin_open();
    lc.finish_open();
    lc.begin_close();
    assert!(!lc.is_open());
    assert!(lc.is_visible());
}

#[test]
fn interrupted_open_completion_is_suppressed() {
    let mut lc = PopupLifecycle::new();
    lc.begin_open();
    lc.begin_close();
    assert!(!lc.finish_open());
}

#[test]
fn interrupted_close_completion_is_suppressed() {
    let mut lc = PopupLifecycle::new();
    lc.begin_open();
    lc.finish_open();
    lc.begin_close();
    lc.begin_open();
    assert!(!lc.finish_close());
}

#[test]
fn default_lifecycle_is_closed() {
    let lc = PopupLifecycle::default();
    assert_eq!(lc.phase(), PopupPhase::Closed);
    assert!(!lc.is_visible());
}
