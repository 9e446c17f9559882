//! Toolkit lifecycle and the per-process binding context
//!
//! libui is a process-wide singleton driven from one thread, so the context
//! every handle points at is leaked on init and lives for the rest of the
//! process. Callback slots hang off it and are released when their control is
//! destroyed (by the application or by an accepted close), when they are
//! replaced, or when [`Ui`] is dropped.

use crate::callback::{self, CallbackKey};
use crate::error::{Error, Result};
use crate::ffi::{self, NativeApi};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::ffi::{c_char, CStr, CString};

/// Shared state reachable from every handle
pub struct Context {
    pub(crate) api: NativeApi,
    callbacks: RefCell<HashMap<CallbackKey, Rc<dyn Any>>>,
}

impl Context {
    fn new(api: NativeApi) -> Self {
        Self {
            api,
            callbacks: RefCell::new(HashMap::new()),
        }
    }

    /// Keep `slot` alive under `key`, handing back whatever it replaced.
    pub(crate) fn retain(&self, key: CallbackKey, slot: Rc<dyn Any>) -> Option<Rc<dyn Any>> {
        self.callbacks.borrow_mut().insert(key, slot)
    }

    /// Drop every callback box registered for `control`.
    pub(crate) fn release_control(&self, control: usize) {
        let released: Vec<Rc<dyn Any>> = {
            let mut callbacks = self.callbacks.borrow_mut();
            let keys: Vec<CallbackKey> = callbacks
                .keys()
                .filter(|key| key.control == control)
                .copied()
                .collect();
            keys.iter().filter_map(|key| callbacks.remove(key)).collect()
        };
        if !released.is_empty() {
            tracing::debug!(control, count = released.len(), "Released callbacks");
        }
    }

    fn release_all(&self) {
        let released = std::mem::take(&mut *self.callbacks.borrow_mut());
        drop(released);
    }

    #[cfg(test)]
    pub(crate) fn retained_count(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Copy a toolkit-allocated string and give the buffer back.
    ///
    /// # Safety
    ///
    /// `text` must be null or a string returned by one of libui's text getters.
    pub(crate) unsafe fn take_text(&self, text: *mut c_char) -> String {
        if text.is_null() {
            return String::new();
        }
        let owned = CStr::from_ptr(text).to_string_lossy().into_owned();
        (self.api.uiFreeText)(text);
        owned
    }
}

/// Convert a Rust string for the C side.
///
/// C stops reading at the first NUL, so that is where the copy stops too.
pub(crate) fn c_string(text: &str) -> CString {
    let bytes = text.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    CString::new(&bytes[..end]).unwrap_or_default()
}

pub(crate) fn c_bool(value: bool) -> std::ffi::c_int {
    if value {
        1
    } else {
        0
    }
}

/// An initialized libui toolkit
///
/// Handles created from a `Ui` must stay on the thread that created it; the
/// type is neither `Send` nor `Sync`, and neither are the handles.
pub struct Ui {
    ctx: &'static Context,
}

impl Ui {
    /// Initialize the system libui this crate was linked against.
    #[cfg(feature = "linked")]
    pub fn init() -> Result<Self> {
        Self::with_api(NativeApi::linked())
    }

    /// Initialize the toolkit behind an arbitrary native function table.
    pub fn with_api(api: NativeApi) -> Result<Self> {
        let mut options = ffi::uiInitOptions::default();
        let err = unsafe { (api.uiInit)(&mut options) };
        if !err.is_null() {
            let msg = unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned();
            unsafe { (api.uiFreeInitError)(err) };
            tracing::error!("libui init failed: {}", msg);
            return Err(Error::Init(msg));
        }

        tracing::info!("libui initialized");
        Ok(Self {
            ctx: Box::leak(Box::new(Context::new(api))),
        })
    }

    pub(crate) fn context(&self) -> &'static Context {
        self.ctx
    }

    /// Run the native event loop until [`Ui::quit`] is called.
    pub fn main(&self) {
        unsafe { (self.ctx.api.uiMain)() }
    }

    /// Prepare the loop for manual stepping with [`Ui::main_step`].
    pub fn main_steps(&self) {
        unsafe { (self.ctx.api.uiMainSteps)() }
    }

    /// Process one round of events. Returns false once the loop has quit.
    pub fn main_step(&self, wait: bool) -> bool {
        unsafe { (self.ctx.api.uiMainStep)(c_bool(wait)) != 0 }
    }

    pub fn quit(&self) {
        unsafe { (self.ctx.api.uiQuit)() }
    }

    /// Called when the platform asks the application to quit (e.g. the macOS
    /// application menu). Returning true lets the loop end.
    pub fn on_should_quit(&self, f: impl FnMut() -> bool + 'static) {
        let (data, slot) = callback::should_quit_slot(f);
        unsafe { (self.ctx.api.uiOnShouldQuit)(callback::should_quit_trampoline, data) };
        drop(self.ctx.retain(CallbackKey::toolkit("should_quit"), slot));
    }
}

impl Drop for Ui {
    fn drop(&mut self) {
        self.ctx.release_all();
        unsafe { (self.ctx.api.uiUninit)() };
        tracing::info!("libui uninitialized");
    }
}
