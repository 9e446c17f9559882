//! Closure boxing for native callbacks
//!
//! libui only accepts a plain function pointer plus an opaque `void *`. Each
//! registration boxes the closure together with the context, passes the box
//! address as user data and a monomorphized trampoline as the function.
//!
//! Two lifetimes are used:
//! - retained: the box lives in the context registry and the closure may run
//!   any number of times (changed / clicked / toggled / selected events);
//! - single shot: the closure runs at most once and is dropped right after,
//!   later firings get the toolkit's default answer (window closing).
//!
//! In both cases the slot stays registered until its control is destroyed or
//! the registration is replaced, so a late native firing never sees a
//! dangling pointer. Slots are reference counted and every trampoline holds
//! its own reference while the closure runs: a closure may destroy its own
//! control or replace its own registration without freeing itself mid-call.

use crate::control::sealed::Handle;
use crate::ffi::EventFn;
use crate::ui::Context;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::ffi::{c_int, c_void};
use std::ptr::NonNull;
use std::rc::Rc;

/// Registry key: which control, which event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CallbackKey {
    pub control: usize,
    pub event: &'static str,
}

impl CallbackKey {
    pub fn new(control: usize, event: &'static str) -> Self {
        Self { control, event }
    }

    /// Key for callbacks that belong to the toolkit rather than a control.
    pub fn toolkit(event: &'static str) -> Self {
        Self { control: 0, event }
    }
}

struct EventSlot<W> {
    ctx: &'static Context,
    f: RefCell<Box<dyn FnMut(&W)>>,
}

/// Take a strong reference to the slot behind `data` for the length of a call.
///
/// # Safety
///
/// `data` must come from `Rc::as_ptr` on a slot the registry still holds.
unsafe fn hold<T>(data: *mut c_void) -> Rc<T> {
    let ptr = data as *const T;
    Rc::increment_strong_count(ptr);
    Rc::from_raw(ptr)
}

unsafe extern "C" fn event_trampoline<W: Handle>(sender: *mut W::Raw, data: *mut c_void) {
    let slot = hold::<EventSlot<W>>(data);
    let Some(sender) = NonNull::new(sender) else {
        return;
    };
    let handle = W::from_raw(slot.ctx, sender);
    match slot.f.try_borrow_mut() {
        Ok(mut f) => f(&handle),
        Err(_) => tracing::warn!(kind = W::KIND, "Skipping re-entrant callback"),
    };
}

/// Register a retained closure for a repeating notification.
pub(crate) fn register_event<W: Handle>(
    widget: &W,
    event: &'static str,
    register: unsafe extern "C" fn(*mut W::Raw, EventFn<W::Raw>, *mut c_void),
    f: impl FnMut(&W) + 'static,
) {
    let ctx = widget.context();
    let slot = Rc::new(EventSlot::<W> {
        ctx,
        f: RefCell::new(Box::new(f)),
    });
    let data = Rc::as_ptr(&slot) as *mut c_void;

    unsafe { register(widget.raw(), event_trampoline::<W>, data) };
    let replaced = ctx.retain(CallbackKey::new(widget.raw() as usize, event), slot);
    tracing::debug!(kind = W::KIND, event, replaced = replaced.is_some(), "Registered callback");
}

struct OnceSlot<W> {
    ctx: &'static Context,
    f: Cell<Option<Box<dyn FnOnce(&W) -> c_int>>>,
    fallback: c_int,
}

unsafe extern "C" fn once_trampoline<W: Handle>(sender: *mut W::Raw, data: *mut c_void) -> c_int {
    let slot = hold::<OnceSlot<W>>(data);
    let Some(sender) = NonNull::new(sender) else {
        return slot.fallback;
    };
    let Some(f) = slot.f.take() else {
        tracing::debug!(kind = W::KIND, "Single-shot callback already spent");
        return slot.fallback;
    };
    let answer = f(&W::from_raw(slot.ctx, sender));
    if answer != 0 {
        // The toolkit destroys the control itself after a nonzero answer
        slot.ctx.release_control(sender.as_ptr() as usize);
    }
    answer
}

/// Register a closure that answers the first native query only.
///
/// `fallback` is what any later query gets once the closure has been spent.
/// A nonzero answer tells the toolkit to destroy the control, so every
/// callback registered for it is released as well.
pub(crate) fn register_once<W: Handle>(
    widget: &W,
    event: &'static str,
    register: unsafe extern "C" fn(
        *mut W::Raw,
        unsafe extern "C" fn(*mut W::Raw, *mut c_void) -> c_int,
        *mut c_void,
    ),
    fallback: c_int,
    f: impl FnOnce(&W) -> c_int + 'static,
) {
    let ctx = widget.context();
    let slot = Rc::new(OnceSlot::<W> {
        ctx,
        f: Cell::new(Some(Box::new(f))),
        fallback,
    });
    let data = Rc::as_ptr(&slot) as *mut c_void;

    unsafe { register(widget.raw(), once_trampoline::<W>, data) };
    let replaced = ctx.retain(CallbackKey::new(widget.raw() as usize, event), slot);
    tracing::debug!(kind = W::KIND, event, replaced = replaced.is_some(), "Registered single-shot callback");
}

struct ShouldQuitSlot {
    f: RefCell<Box<dyn FnMut() -> bool>>,
}

pub(crate) unsafe extern "C" fn should_quit_trampoline(data: *mut c_void) -> c_int {
    let slot = hold::<ShouldQuitSlot>(data);
    let answer = match slot.f.try_borrow_mut() {
        Ok(mut f) => crate::ui::c_bool(f()),
        Err(_) => {
            tracing::warn!("Skipping re-entrant should-quit callback");
            0
        }
    };
    answer
}

/// Wrap a should-quit closure; returns the user data pointer and the owning slot.
pub(crate) fn should_quit_slot(f: impl FnMut() -> bool + 'static) -> (*mut c_void, Rc<dyn Any>) {
    let slot = Rc::new(ShouldQuitSlot {
        f: RefCell::new(Box::new(f)),
    });
    let data = Rc::as_ptr(&slot) as *mut c_void;
    (data, slot)
}
