//! The capability set every widget shares
//!
//! libui models all widgets as a `uiControl` "base class". Rather than
//! relying on pointer layout at call sites, each handle type implements
//! [`Control`] and the one pointer cast lives in [`Control::as_raw`].

use crate::error::{Error, Result};
use crate::ffi::{uiControl, NativeApi};
use crate::ui::Context;
use std::ptr::NonNull;

pub(crate) mod sealed {
    use super::*;

    /// What a typed handle knows about itself.
    pub trait Handle: Sized + Clone + 'static {
        type Raw;
        /// Human readable widget kind, used in errors and logs.
        const KIND: &'static str;

        fn from_raw(ctx: &'static Context, raw: NonNull<Self::Raw>) -> Self;
        fn context(&self) -> &'static Context;
        fn raw(&self) -> *mut Self::Raw;

        /// Wrap the result of a native constructor, refusing null.
        fn wrap(ctx: &'static Context, raw: *mut Self::Raw) -> Result<Self> {
            match NonNull::new(raw) {
                Some(raw) => Ok(Self::from_raw(ctx, raw)),
                None => {
                    tracing::error!(kind = Self::KIND, "Native constructor returned null");
                    Err(Error::Allocation { kind: Self::KIND })
                }
            }
        }

        fn api(&self) -> &'static NativeApi {
            &self.context().api
        }
    }
}

/// Operations available on every widget.
pub trait Control: sealed::Handle {
    /// The handle viewed as libui's generic control.
    fn as_raw(&self) -> *mut uiControl {
        self.raw().cast()
    }

    /// The OS-level handle behind this control, uninterpreted.
    ///
    /// - Windows: an `HWND`
    /// - GTK+: a pointer to the underlying `GtkWidget`
    /// - macOS: a pointer to the `NSWindow` / `NSView`
    fn handle(&self) -> usize {
        unsafe { (self.api().uiControlHandle)(self.as_raw()) }
    }

    fn toplevel(&self) -> bool {
        unsafe { (self.api().uiControlToplevel)(self.as_raw()) != 0 }
    }

    fn show(&self) {
        unsafe { (self.api().uiControlShow)(self.as_raw()) }
    }

    fn hide(&self) {
        unsafe { (self.api().uiControlHide)(self.as_raw()) }
    }

    fn enable(&self) {
        unsafe { (self.api().uiControlEnable)(self.as_raw()) }
    }

    fn disable(&self) {
        unsafe { (self.api().uiControlDisable)(self.as_raw()) }
    }

    /// Whether the control accepts input. Defaults to `true`.
    fn enabled(&self) -> bool {
        unsafe { (self.api().uiControlEnabled)(self.as_raw()) != 0 }
    }

    fn set_enabled(&self, enabled: bool) {
        if enabled {
            self.enable()
        } else {
            self.disable()
        }
    }

    /// Whether the control is shown. Defaults to `true` for everything but
    /// windows, which start hidden.
    fn visible(&self) -> bool {
        unsafe { (self.api().uiControlVisible)(self.as_raw()) != 0 }
    }

    fn set_visible(&self, visible: bool) {
        if visible {
            self.show()
        } else {
            self.hide()
        }
    }

    /// Destroy and free the native control.
    ///
    /// Containers destroy their children with them. Clones of this handle
    /// must not be used afterwards.
    fn destroy(self) {
        let control = self.as_raw();
        unsafe { (self.api().uiControlDestroy)(control) };
        self.context().release_control(control as usize);
        tracing::debug!(kind = Self::KIND, "Destroyed control");
    }
}

impl<T: sealed::Handle> Control for T {}

/// Declare a typed handle over a libui control.
macro_rules! control_handle {
    ($(#[$meta:meta])* $name:ident($raw:ident), $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            ctx: &'static $crate::ui::Context,
            raw: std::ptr::NonNull<$crate::ffi::$raw>,
        }

        impl $crate::control::sealed::Handle for $name {
            type Raw = $crate::ffi::$raw;
            const KIND: &'static str = $kind;

            fn from_raw(
                ctx: &'static $crate::ui::Context,
                raw: std::ptr::NonNull<$crate::ffi::$raw>,
            ) -> Self {
                Self { ctx, raw }
            }

            fn context(&self) -> &'static $crate::ui::Context {
                self.ctx
            }

            fn raw(&self) -> *mut $crate::ffi::$raw {
                self.raw.as_ptr()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.raw == other.raw
            }
        }

        impl Eq for $name {}

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.raw).finish()
            }
        }
    };
}

pub(crate) use control_handle;
