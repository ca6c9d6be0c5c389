//! Background chrome view.
//!
//! An NSView subclass that draws the popup's rounded-rectangle background
//! with an arrow at the top edge pointing at the status item. The arrow's
//! horizontal position is an instance variable; the controller updates it
//! whenever the panel moves or resizes.

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::geometry::Size;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, NSPoint, NSRect, NSSize, ObjectExt, YES,
};

const CLASS_NAME: &std::ffi::CStr = c"MenupopBackgroundView";

/// Circle-approximation factor for the corner bezier control points.
const KAPPA: f64 = 0.55;

/// Register the chrome view class (once) and create an instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn register_and_create_background(arrow: Size, corner_radius: f64) -> id {
    let class = ensure_class();

    let view: id = msg_send![class, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(0.0, 0.0));
    let view: id = msg_send![view, initWithFrame: frame];

    (*view).store_ivar::<f64>("_arrowX", 0.0);
    (*view).store_ivar::<f64>("_arrowWidth", arrow.width);
    (*view).store_ivar::<f64>("_arrowHeight", arrow.height);
    (*view).store_ivar::<f64>("_cornerRadius", corner_radius);

    view
}

/// Move the arrow tip to `x` (panel-local coordinates) and redraw.
///
/// # Safety
/// `view` must be a valid MenupopBackgroundView. Main thread only.
pub unsafe fn set_arrow_offset(view: id, x: f64) {
    (*view).store_ivar::<f64>("_arrowX", x);
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

unsafe fn ensure_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(CLASS_NAME) {
        return cls;
    }

    let superclass = AnyClass::get(c"NSView").unwrap();
    let mut builder = ClassBuilder::new(CLASS_NAME, superclass).unwrap();

    builder.add_ivar::<f64>(c"_arrowX");
    builder.add_ivar::<f64>(c"_arrowWidth");
    builder.add_ivar::<f64>(c"_arrowHeight");
    builder.add_ivar::<f64>(c"_cornerRadius");

    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, _dirty: NSRect) {
    let arrow_x = *this.load_ivar::<f64>("_arrowX");
    let arrow_width = *this.load_ivar::<f64>("_arrowWidth");
    let arrow_height = *this.load_ivar::<f64>("_arrowHeight");
    let radius = *this.load_ivar::<f64>("_cornerRadius");

    let bounds: NSRect = msg_send![this, bounds];

    let max_x = bounds.origin.x + bounds.size.width;
    let min_x = bounds.origin.x;
    let top = bounds.origin.y + bounds.size.height;
    let max_y = top - arrow_height;
    let min_y = bounds.origin.y;
    let corner_control_point = -radius + radius * KAPPA;

    let path: id = msg_send![get_class("NSBezierPath"), bezierPath];

    // Arrow
    let _: () = msg_send![path, moveToPoint: NSPoint::new(arrow_x, top)];
    let _: () = msg_send![path, lineToPoint: NSPoint::new(arrow_x + arrow_width / 2.0, max_y)];
    let _: () = msg_send![path, lineToPoint: NSPoint::new(max_x - radius, max_y)];

    // Top right corner
    let _: () = msg_send![
        path,
        curveToPoint: NSPoint::new(max_x, max_y - radius),
        controlPoint1: NSPoint::new(max_x + corner_control_point, max_y),
        controlPoint2: NSPoint::new(max_x, max_y + corner_control_point)
    ];

    let _: () = msg_send![path, lineToPoint: NSPoint::new(max_x, min_y + radius)];

    // Bottom right corner
    let _: () = msg_send![
        path,
        curveToPoint: NSPoint::new(max_x - radius, min_y),
        controlPoint1: NSPoint::new(max_x, min_y - corner_control_point),
        controlPoint2: NSPoint::new(max_x + corner_control_point, min_y)
    ];

    let _: () = msg_send![path, lineToPoint: NSPoint::new(min_x + radius, min_y)];

    // Bottom left corner
    let _: () = msg_send![
        path,
        curveToPoint: NSPoint::new(min_x, min_y + radius),
        controlPoint1: NSPoint::new(min_x - corner_control_point, min_y),
        controlPoint2: NSPoint::new(min_x, min_y - corner_control_point)
    ];

    let _: () = msg_send![path, lineToPoint: NSPoint::new(min_x, max_y - radius)];

    // Top left corner
    let _: () = msg_send![
        path,
        curveToPoint: NSPoint::new(min_x + radius, max_y),
        controlPoint1: NSPoint::new(min_x, max_y + corner_control_point),
        controlPoint2: NSPoint::new(min_x - corner_control_point, max_y)
    ];

    let _: () = msg_send![path, lineToPoint: NSPoint::new(arrow_x - arrow_width / 2.0, max_y)];
    let _: () = msg_send![path, closePath];

    let fill: id = msg_send![get_class("NSColor"), windowBackgroundColor];
    let _: () = msg_send![fill, setFill];
    let _: () = msg_send![path, fill];
}
