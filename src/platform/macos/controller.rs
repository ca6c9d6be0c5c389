//! Popup controller.
//!
//! Owns the status item and the panel, orchestrates open/close/resize, and
//! feeds the event monitors. Everything runs on the main thread inside the
//! AppKit event loop; the only asynchrony is the pair of fade animations,
//! whose completion blocks are re-entered on the main thread.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::events::modifiers::PopupModifiers;
use crate::events::trigger::is_long_click;
use crate::geometry::{self, Rect, Size};
use crate::model::config::PopupConfig;
use crate::model::lifecycle::PopupLifecycle;

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, NSApp, NSPoint, NSRect, NSSize, NO, YES,
};
use crate::platform::macos::input::{monitors, status_click};
use crate::platform::macos::ui::{background, delegate, panel};

/// Menu-bar popup: a status item plus the floating panel it toggles.
///
/// Created with [`PopupController::new`]; dropping the controller removes
/// the status item, the monitors and the panel. The box returned by `new`
/// must be kept alive for as long as the popup should exist, because the
/// event monitors and the window delegate hold a pointer to it.
pub struct PopupController {
    config: PopupConfig,
    lifecycle: PopupLifecycle,

    status_item: id,
    panel: id,
    background: id,
    content_view: id,
    panel_delegate: id,

    mouse_down_monitor: id,
    mouse_up_monitor: id,
    // Retained; resolves the clicked (possibly replicated) status-item
    // window and times the long-click close.
    last_mouse_down: id,

    should_open: Option<Box<dyn Fn(PopupModifiers) -> bool>>,
    will_open: Option<Box<dyn FnMut(PopupModifiers)>>,
    did_open: Option<Box<dyn FnMut()>>,
    will_close: Option<Box<dyn FnMut()>>,
    did_close: Option<Box<dyn FnMut()>>,

    // The fade completion blocks can outlive the controller inside an
    // in-flight animation group; they bail out once this drops.
    alive: Rc<Cell<bool>>,
}

impl PopupController {
    /// Create the status item and the panel hosting `content_view`, and
    /// install the click monitors.
    ///
    /// The caller keeps ownership of `content_view`; its current frame size
    /// determines the initial panel size.
    ///
    /// # Safety
    /// - Must be called from the main thread.
    /// - `content_view` must be a valid NSView pointer.
    pub unsafe fn new(content_view: id, mut config: PopupConfig) -> Box<PopupController> {
        config.validate();

        let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
        // NSVariableStatusItemLength = -1.0
        let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
        let _: id = msg_send![status_item, retain];

        let panel = panel::register_and_create_panel();
        let chrome = background::register_and_create_background(
            config.arrow_size,
            config.corner_radius,
        );
        let _: () = msg_send![panel, setContentView: chrome];
        let _: () = msg_send![chrome, addSubview: content_view];
        let _: () = msg_send![panel, setInitialFirstResponder: content_view];

        let content_frame: NSRect = msg_send![content_view, frame];

        let mut controller = Box::new(PopupController {
            config,
            lifecycle: PopupLifecycle::new(),
            status_item,
            panel,
            background: chrome,
            content_view,
            panel_delegate: nil,
            mouse_down_monitor: nil,
            mouse_up_monitor: nil,
            last_mouse_down: nil,
            should_open: None,
            will_open: None,
            did_open: None,
            will_close: None,
            did_close: None,
            alive: Rc::new(Cell::new(true)),
        });

        controller.install();
        controller.resize_popup(content_frame.size.width, content_frame.size.height);

        controller
    }

    unsafe fn install(&mut self) {
        let this: *mut PopupController = self;

        self.panel_delegate = delegate::create_panel_delegate(this);
        let _: () = msg_send![self.panel, setDelegate: self.panel_delegate];

        let (down, up) = monitors::install_click_monitors(this);
        self.mouse_down_monitor = down;
        self.mouse_up_monitor = up;
    }

    // === Accessors ===

    /// The status item in the system menu bar.
    pub fn status_item(&self) -> id {
        self.status_item
    }

    /// The status item's button, or `nil` before the item is realized.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn status_button(&self) -> id {
        msg_send![self.status_item, button]
    }

    /// The floating panel window.
    pub fn panel(&self) -> id {
        self.panel
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Open from the moment opening starts until closing starts.
    pub fn is_open(&self) -> bool {
        self.lifecycle.is_open()
    }

    // === Callbacks ===

    /// Predicate consulted before a status-item click toggles the popup.
    pub fn set_should_open(&mut self, f: impl Fn(PopupModifiers) -> bool + 'static) {
        self.should_open = Some(Box::new(f));
    }

    /// Called before the open animation, with the modifier keys held during
    /// the triggering click (`None` for programmatic opens).
    pub fn set_will_open(&mut self, f: impl FnMut(PopupModifiers) + 'static) {
        self.will_open = Some(Box::new(f));
    }

    /// Called after the open animation completes.
    pub fn set_did_open(&mut self, f: impl FnMut() + 'static) {
        self.did_open = Some(Box::new(f));
    }

    /// Called before the close animation.
    pub fn set_will_close(&mut self, f: impl FnMut() + 'static) {
        self.will_close = Some(Box::new(f));
    }

    /// Called after the close animation completes and the panel is gone.
    pub fn set_did_close(&mut self, f: impl FnMut() + 'static) {
        self.did_close = Some(Box::new(f));
    }

    // === Actions ===

    /// Open programmatically; `will_open` reports no modifiers.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn open_popup(&mut self) {
        self.open_panel(PopupModifiers::None);
    }

    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn close_popup(&mut self) {
        self.close_panel();
    }

    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn toggle_popup(&mut self) {
        self.toggle_from_click(PopupModifiers::None);
    }

    unsafe fn toggle_from_click(&mut self, modifiers: PopupModifiers) {
        if self.lifecycle.is_open() {
            self.close_panel();
        } else {
            self.open_panel(modifiers);
        }
    }

    /// Resize the panel to fit `width` × `height` of content, animated when
    /// the panel is currently visible. The embedded content view is resized
    /// to match.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn resize_popup(&mut self, width: f64, height: f64) {
        let current: NSRect = msg_send![self.panel, frame];
        let new_size = geometry::panel_size(
            Size::new(width, height),
            self.config.arrow_size.height,
            self.config.content_inset,
        );
        let frame = geometry::resized_frame(from_nsrect(current), new_size);
        debug!(width, height, "resizing popup");

        let inset = self.config.content_inset;
        let content_frame = NSRect::new(NSPoint::new(inset, inset), NSSize::new(width, height));
        let _: () = msg_send![self.content_view, setFrame: content_frame];

        let visible: bool = msg_send![self.panel, isVisible];
        let _: () = msg_send![self.panel, setFrame: to_nsrect(frame), display: YES, animate: visible];
    }

    /// Resize keeping the current content height.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn resize_popup_width(&mut self, width: f64) {
        let frame: NSRect = msg_send![self.content_view, frame];
        self.resize_popup(width, frame.size.height);
    }

    /// Resize keeping the current content width.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn resize_popup_height(&mut self, height: f64) {
        let frame: NSRect = msg_send![self.content_view, frame];
        self.resize_popup(frame.size.width, height);
    }

    // === Monitor entry points ===

    pub(crate) unsafe fn handle_mouse_down(&mut self, event: id) -> id {
        let info = status_click::click_info(event, self.status_button(), true);
        let modifiers = PopupModifiers::from_flags(info.modifier_flags);

        let permitted = match &self.should_open {
            Some(predicate) => predicate(modifiers),
            None => true,
        };

        if info.should_trigger() && permitted {
            self.remember_mouse_down(event);
            self.toggle_from_click(modifiers);
            // The click is ours; keep it from also reaching the button
            return nil;
        }

        event
    }

    pub(crate) unsafe fn handle_mouse_up(&mut self, event: id) -> id {
        if self.last_mouse_down == nil || !self.lifecycle.is_open() {
            return event;
        }

        let info = status_click::click_info(event, self.status_button(), false);
        if info.should_trigger() {
            let down_timestamp: f64 = msg_send![self.last_mouse_down, timestamp];
            let up_timestamp: f64 = msg_send![event, timestamp];
            if is_long_click(down_timestamp, up_timestamp) {
                self.toggle_popup();
            }
        }

        event
    }

    // === Delegate entry points ===

    pub(crate) unsafe fn handle_window_will_close(&mut self) {
        self.close_panel();
    }

    pub(crate) unsafe fn handle_window_did_resign_key(&mut self) {
        let visible: bool = msg_send![self.panel, isVisible];
        if visible && !self.lifecycle.is_opening() {
            self.close_panel();
        }
    }

    pub(crate) unsafe fn handle_window_did_resize(&mut self) {
        self.reposition_arrow();
    }

    // === Controlling the panel ===

    unsafe fn open_panel(&mut self, modifiers: PopupModifiers) {
        debug!(?modifiers, "opening popup");

        if let Some(callback) = &mut self.will_open {
            callback(modifiers);
        }

        self.lifecycle.begin_open();
        // Highlight instantly on open; unhighlighting waits for the close
        // animation to finish
        self.set_button_highlighted(true);

        let _: () = msg_send![self.content_view, setHidden: NO];

        let panel_rect = self.panel_rect();

        let app = NSApp();
        let _: () = msg_send![app, activateIgnoringOtherApps: NO];
        let _: () = msg_send![self.panel, setAlphaValue: 0.0f64];
        let _: () = msg_send![self.panel, setFrame: to_nsrect(panel_rect), display: YES];

        self.reposition_arrow();

        let _: () = msg_send![self.panel, makeKeyAndOrderFront: nil];

        let this: *mut PopupController = self;
        let alive = self.alive.clone();
        panel::fade_to(self.panel, 1.0, self.config.open_duration, move || {
            if !alive.get() {
                return;
            }
            unsafe {
                let controller = &mut *this;
                if controller.lifecycle.finish_open() {
                    if let Some(callback) = &mut controller.did_open {
                        callback();
                    }

                    // Opening from an inactive space/screen loses key status
                    // to the system's active-screen change; without key
                    // status, clicking outside would not close the popup.
                    // Claim it again now that the panel is fully visible.
                    let _: () = msg_send![controller.panel, makeKeyAndOrderFront: nil];
                }
            }
        });
    }

    unsafe fn close_panel(&mut self) {
        debug!("closing popup");

        if let Some(callback) = &mut self.will_close {
            callback();
        }

        self.lifecycle.begin_close();

        let _: () = msg_send![self.content_view, setHidden: YES];

        let this: *mut PopupController = self;
        let alive = self.alive.clone();
        panel::fade_to(self.panel, 0.0, self.config.close_duration, move || {
            if !alive.get() {
                return;
            }
            unsafe {
                let controller = &mut *this;
                if controller.lifecycle.finish_close() {
                    let _: () = msg_send![controller.panel, orderOut: nil];
                    controller.set_button_highlighted(false);
                    if let Some(callback) = &mut controller.did_close {
                        callback();
                    }
                }
            }
        });
    }

    // === Calculating rects ===

    /// Window of the clicked (possibly replicated) status item, or `nil`
    /// when the popup is being opened programmatically.
    unsafe fn reference_window(&self) -> id {
        if self.last_mouse_down == nil {
            return nil;
        }
        let item = status_click::clicked_status_item(self.last_mouse_down);
        status_click::real_window(item)
    }

    unsafe fn status_rect(&self) -> Rect {
        let reference = self.reference_window();
        match status_click::button_global_rect(self.status_item, reference) {
            Some(rect) => geometry::anchored_status_rect(rect),
            None => Rect::zero(),
        }
    }

    unsafe fn screen_rect(&self) -> Rect {
        let reference = self.reference_window();
        let mut screen: id = if reference != nil {
            msg_send![reference, screen]
        } else {
            nil
        };
        if screen == nil {
            screen = msg_send![get_class("NSScreen"), mainScreen];
        }
        if screen == nil {
            return Rect::zero();
        }
        let frame: NSRect = msg_send![screen, frame];
        from_nsrect(frame)
    }

    unsafe fn panel_rect(&self) -> Rect {
        let frame: NSRect = msg_send![self.panel, frame];
        geometry::panel_rect(
            Size::new(frame.size.width, frame.size.height),
            self.status_rect(),
            self.screen_rect(),
            self.config.arrow_size.height,
        )
    }

    /// Re-aim the arrow at the status item's center.
    unsafe fn reposition_arrow(&mut self) {
        let status = self.status_rect();
        let frame: NSRect = msg_send![self.panel, frame];
        let x = geometry::arrow_offset(status, frame.origin.x);
        background::set_arrow_offset(self.background, x);
    }

    // === Internal helpers ===

    unsafe fn remember_mouse_down(&mut self, event: id) {
        if self.last_mouse_down != nil {
            let _: () = msg_send![self.last_mouse_down, release];
        }
        let _: id = msg_send![event, retain];
        self.last_mouse_down = event;
    }

    unsafe fn set_button_highlighted(&self, highlighted: bool) {
        let button = self.status_button();
        if button != nil {
            let _: () = msg_send![button, setHighlighted: highlighted];
        }
    }
}

impl Drop for PopupController {
    fn drop(&mut self) {
        unsafe {
            self.alive.set(false);

            monitors::remove_monitor(self.mouse_down_monitor);
            monitors::remove_monitor(self.mouse_up_monitor);

            let _: () = msg_send![self.panel, setDelegate: nil];
            if self.panel_delegate != nil {
                delegate::clear_controller(self.panel_delegate);
                let _: () = msg_send![self.panel_delegate, release];
            }

            let _: () = msg_send![self.panel, orderOut: nil];

            let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
            let _: () = msg_send![status_bar, removeStatusItem: self.status_item];

            if self.last_mouse_down != nil {
                let _: () = msg_send![self.last_mouse_down, release];
            }
            let _: () = msg_send![self.status_item, release];
            let _: () = msg_send![self.background, release];
            let _: () = msg_send![self.panel, release];
        }
    }
}

fn to_nsrect(rect: Rect) -> NSRect {
    NSRect::new(
        NSPoint::new(rect.origin.x, rect.origin.y),
        NSSize::new(rect.size.width, rect.size.height),
    )
}

fn from_nsrect(rect: NSRect) -> Rect {
    Rect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    )
}
