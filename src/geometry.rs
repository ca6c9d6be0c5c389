//! Panel placement math (pure Rust, no FFI).
//!
//! All rects use the AppKit convention: origin at the bottom-left corner,
//! y growing upwards. The Cocoa layer converts to and from `NSRect` at the
//! boundary so everything here stays testable off-macOS.
//!
//! Failures degrade silently: a missing screen produces a zero rect rather
//! than an error.

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle (bottom-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }
}

/// Outer panel size for a given content size: the content is surrounded by
/// the inset on all sides, with the arrow stacked on top.
pub fn panel_size(content: Size, arrow_height: f64, inset: f64) -> Size {
    Size::new(
        content.width + inset * 2.0,
        content.height + arrow_height + inset * 2.0,
    )
}

/// Shift the status-button rect down by its own height, so the panel hangs
/// from the bottom edge of the menu bar instead of covering it.
pub fn anchored_status_rect(button_rect: Rect) -> Rect {
    let mut rect = button_rect;
    rect.origin.y -= rect.size.height;
    rect
}

/// Position a panel of `panel` size centered under `status`, clamped so the
/// panel's right edge stays at least `arrow_height` inside the screen (the
/// arrow must never run off-edge).
///
/// An empty screen rect (no screen could be resolved) yields a zero rect.
pub fn panel_rect(panel: Size, status: Rect, screen: Rect, arrow_height: f64) -> Rect {
    if screen.is_empty() {
        return Rect::zero();
    }

    let mut rect = Rect {
        origin: Point::new(
            (status.mid_x() - panel.width / 2.0).round(),
            status.max_y() - panel.height,
        ),
        size: panel,
    };

    let limit = screen.max_x() - arrow_height;
    if rect.max_x() > limit {
        rect.origin.x -= rect.max_x() - limit;
    }

    rect
}

/// Horizontal offset of the arrow tip inside the panel: the status item's
/// center expressed in panel-local coordinates.
pub fn arrow_offset(status: Rect, panel_min_x: f64) -> f64 {
    status.mid_x().round() - panel_min_x
}

/// Frame for a panel growing or shrinking to `new_size`: the top edge stays
/// anchored (the arrow keeps touching the menu bar) and width changes are
/// split evenly between both sides.
pub fn resized_frame(current: Rect, new_size: Size) -> Rect {
    let mut frame = current;

    frame.origin.y -= new_size.height - frame.size.height;
    frame.size.height = new_size.height;

    let width_difference = new_size.width - frame.size.width;
    if width_difference != 0.0 {
        frame.origin.x -= width_difference / 2.0;
        frame.size.width = new_size.width;
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_accessors() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.mid_x(), 25.0);
        assert_eq!(r.max_x(), 40.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 60.0);
        assert!(!r.is_empty());
        assert!(Rect::zero().is_empty());
    }

    #[test]
    fn anchored_status_rect_drops_by_height() {
        let button = Rect::new(500.0, 1000.0, 30.0, 22.0);
        let anchored = anchored_status_rect(button);
        assert_eq!(anchored.min_y(), 978.0);
        // The anchored rect's top edge is the button's bottom edge
        assert_eq!(anchored.max_y(), 1000.0);
    }
}
