#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Demo binary: a label inside a menu-bar popup.
//!
//! Click the "menupop" status item to toggle the panel; hold option while
//! clicking to change the greeting. `RUST_LOG=menupop=debug` shows the
//! controller's lifecycle.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    #[cfg(target_os = "macos")]
    macos_demo::run();

    #[cfg(not(target_os = "macos"))]
    eprintln!("menupop is a macOS widget; nothing to run on this platform.");
}

#[cfg(target_os = "macos")]
mod macos_demo {
    use tracing::info;

    use menupop::platform::macos::ffi::bridge::{
        autoreleasepool, get_class, id, msg_send, nil, nsstring_id, NSApp, NSPoint, NSRect,
        NSSize, NO,
    };
    use menupop::{PopupConfig, PopupController, PopupModifiers};

    pub fn run() {
        autoreleasepool(|| unsafe {
            let app = NSApp();
            // NSApplicationActivationPolicyAccessory = 1
            let _: bool = msg_send![app, setActivationPolicy: 1i64];

            // Caller-supplied content: a fixed-size view holding a label
            let content: id = msg_send![get_class("NSView"), alloc];
            let content: id = msg_send![
                content,
                initWithFrame: NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(300.0, 400.0))
            ];

            let label = make_label(50.0, 175.0, 200.0, 50.0);
            let _: () = msg_send![content, addSubview: label];

            let mut popup = PopupController::new(content, PopupConfig::default());

            let button: id = popup.status_button();
            if button != nil {
                let _: () = msg_send![button, setTitle: nsstring_id("menupop")];
            }

            popup.set_will_open(move |keys| {
                let greeting = match keys {
                    PopupModifiers::Option | PopupModifiers::ShiftOption => "Hi, option user ;)",
                    _ => "Hi!",
                };
                info!(?keys, "will open popup");
                unsafe {
                    let _: () = msg_send![label, setStringValue: nsstring_id(greeting)];
                }
            });
            popup.set_did_open(|| info!("opened popup"));
            popup.set_will_close(|| info!("will close popup"));
            popup.set_did_close(|| info!("closed popup"));

            let _: () = msg_send![app, run];

            // run() never returns; the controller lives for the process
            drop(popup);
        });
    }

    /// Static centered label, system font 24pt.
    unsafe fn make_label(x: f64, y: f64, width: f64, height: f64) -> id {
        let label: id = msg_send![get_class("NSTextField"), alloc];
        let label: id = msg_send![
            label,
            initWithFrame: NSRect::new(NSPoint::new(x, y), NSSize::new(width, height))
        ];
        let _: () = msg_send![label, setBezeled: NO];
        let _: () = msg_send![label, setDrawsBackground: NO];
        let _: () = msg_send![label, setEditable: NO];
        let _: () = msg_send![label, setSelectable: NO];
        let _: () = msg_send![label, setAlignment: 1i64]; // NSTextAlignmentCenter
        let font: id = msg_send![get_class("NSFont"), systemFontOfSize: 24.0f64];
        let _: () = msg_send![label, setFont: font];
        label
    }
}
