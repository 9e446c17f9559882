//! libui Widgets
//!
//! Typed Rust handles over [libui](https://github.com/andlabs/libui), a small
//! C GUI toolkit that uses the native widgets of each platform (Win32, GTK+,
//! Cocoa).
//!
//! # Architecture
//!
//! Every handle is a non-null pointer to a toolkit-owned control plus a
//! reference to the process-wide context. Calls forward to exactly one native
//! function through a [`NativeApi`] table, converting `int` flags to `bool`
//! and C strings to `String` on the way.
//!
//! The layer keeps no widget state of its own. What it does own:
//!
//! 1. Closures registered as native callbacks, boxed and kept alive until
//!    their control is destroyed or the registration is replaced
//! 2. Text buffers returned by the toolkit, which are copied and given back
//!
//! libui is single-threaded. [`Ui`] and all handles are `!Send`, so they stay
//! on the thread that initialized the toolkit.
//!
//! # Usage
//!
//! ```ignore
//! use libui_widgets::{Button, Control, LinearBox, Ui, Window, WindowOptions};
//!
//! let ui = Ui::init()?;
//! let window = Window::new(&ui, &WindowOptions::new("Hello", 320, 240))?;
//! let column = LinearBox::vertical(&ui)?;
//! let button = Button::new(&ui, "Quit")?;
//! column.append(&button, false);
//! window.set_child(&column);
//!
//! button.on_clicked(|_| { /* ... */ });
//! window.on_closing(|_| 1);
//! window.show();
//! ui.main();
//! ```

mod button;
mod callback;
mod choice;
mod containers;
mod control;
mod datetime;
mod entry;
mod error;
pub mod ffi;
mod label;
mod numeric;
mod ui;
mod window;

#[cfg(test)]
mod testing;

pub use button::{Button, Color, ColorButton, FontButton, FontDescriptor, Italic, Stretch};
pub use choice::{Checkbox, Combobox, EditableCombobox, RadioButtons};
pub use containers::{Align, At, Form, Grid, GridCell, Group, LinearBox, Tab};
pub use control::Control;
pub use datetime::{DateTime, DateTimePicker};
pub use entry::{Entry, MultilineEntry};
pub use error::{Error, Result};
pub use ffi::NativeApi;
pub use label::{Label, Separator};
pub use numeric::{ProgressBar, Slider, Spinbox};
pub use ui::Ui;
pub use window::{Window, WindowOptions};
