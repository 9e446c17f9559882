//! Top-level windows
//!
//! A [`Window`] holds one child control that occupies the whole content area.
//! Windows start hidden; call [`Control::show`] once the content is in place.

use crate::callback;
use crate::control::{control_handle, sealed::Handle, Control};
use crate::error::Result;
use crate::ui::{c_bool, c_string, Ui};
use raw_window_handle::RawWindowHandle;
use std::ffi::c_int;

/// Options used when creating a window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    /// Text shown in the title bar
    pub title: String,
    /// Initial content width in points
    pub width: i32,
    /// Initial content height in points
    pub height: i32,
    /// Reserve space for the application menu bar
    pub has_menubar: bool,
}

impl WindowOptions {
    pub fn new(title: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            has_menubar: true,
        }
    }

    pub fn with_menubar(mut self, has_menubar: bool) -> Self {
        self.has_menubar = has_menubar;
        self
    }
}

control_handle!(
    /// A top-level window.
    Window(uiWindow),
    "window"
);

impl Window {
    /// Create a new window. It is not shown until [`Control::show`].
    pub fn new(ui: &Ui, options: &WindowOptions) -> Result<Self> {
        let ctx = ui.context();
        let title = c_string(&options.title);
        let raw = unsafe {
            (ctx.api.uiNewWindow)(
                title.as_ptr(),
                options.width,
                options.height,
                c_bool(options.has_menubar),
            )
        };
        Self::wrap(ctx, raw)
    }

    /// The text shown in the title bar.
    pub fn title(&self) -> String {
        unsafe { self.ctx.take_text((self.api().uiWindowTitle)(self.raw())) }
    }

    pub fn set_title(&self, title: &str) {
        let title = c_string(title);
        unsafe { (self.api().uiWindowSetTitle)(self.raw(), title.as_ptr()) }
    }

    /// Size of the content area, excluding decorations and menu bar.
    pub fn content_size(&self) -> (i32, i32) {
        let mut width: c_int = 0;
        let mut height: c_int = 0;
        unsafe { (self.api().uiWindowContentSize)(self.raw(), &mut width, &mut height) };
        (width, height)
    }

    pub fn set_content_size(&self, width: i32, height: i32) {
        unsafe { (self.api().uiWindowSetContentSize)(self.raw(), width, height) }
    }

    /// Frameless window: no borders, title bar or window controls.
    pub fn borderless(&self) -> bool {
        unsafe { (self.api().uiWindowBorderless)(self.raw()) != 0 }
    }

    pub fn set_borderless(&self, borderless: bool) {
        unsafe { (self.api().uiWindowSetBorderless)(self.raw(), c_bool(borderless)) }
    }

    /// Whether the content has a margin. Defaults to `false`.
    pub fn margined(&self) -> bool {
        unsafe { (self.api().uiWindowMargined)(self.raw()) != 0 }
    }

    pub fn set_margined(&self, margined: bool) {
        unsafe { (self.api().uiWindowSetMargined)(self.raw(), c_bool(margined)) }
    }

    pub fn fullscreen(&self) -> bool {
        unsafe { (self.api().uiWindowFullscreen)(self.raw()) != 0 }
    }

    pub fn set_fullscreen(&self, fullscreen: bool) {
        unsafe { (self.api().uiWindowSetFullscreen)(self.raw(), c_bool(fullscreen)) }
    }

    /// Replace the single child of this window.
    pub fn set_child(&self, child: &impl Control) {
        unsafe { (self.api().uiWindowSetChild)(self.raw(), child.as_raw()) }
    }

    /// Ask `f` whether the window may close when the user tries to.
    ///
    /// Nonzero lets libui destroy the window, zero keeps it open. The closure
    /// answers the first request only; afterwards the window behaves as if no
    /// handler was set until `on_closing` is called again.
    pub fn on_closing(&self, f: impl FnOnce(&Window) -> i32 + 'static) {
        callback::register_once(self, "closing", self.api().uiWindowOnClosing, 0, f);
    }

    pub fn on_content_size_changed(&self, f: impl FnMut(&Window) + 'static) {
        callback::register_event(
            self,
            "content_size_changed",
            self.api().uiWindowOnContentSizeChanged,
            f,
        );
    }

    /// The native window as a `raw-window-handle` value, where that crate has
    /// a matching variant (Win32 `HWND`, AppKit `NSWindow`).
    pub fn raw_window_handle(&self) -> Option<RawWindowHandle> {
        match self.handle() {
            0 => None,
            native => platform_handle(native),
        }
    }
}

#[cfg(target_os = "windows")]
fn platform_handle(native: usize) -> Option<RawWindowHandle> {
    let mut handle = raw_window_handle::Win32WindowHandle::empty();
    handle.hwnd = native as *mut std::ffi::c_void;
    Some(RawWindowHandle::Win32(handle))
}

#[cfg(target_os = "macos")]
fn platform_handle(native: usize) -> Option<RawWindowHandle> {
    let mut handle = raw_window_handle::AppKitWindowHandle::empty();
    handle.ns_window = native as *mut std::ffi::c_void;
    Some(RawWindowHandle::AppKit(handle))
}

// GTK hands out a GtkWindow pointer, which has no raw-window-handle variant.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_handle(_native: usize) -> Option<RawWindowHandle> {
    None
}
