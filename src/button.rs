//! Buttons: push, color and font buttons

use crate::callback;
use crate::control::{control_handle, sealed::Handle};
use crate::error::Result;
use crate::ffi;
use crate::ui::{c_string, Ui};
use std::ffi::{c_double, CStr};

control_handle!(
    /// A simple push button.
    Button(uiButton),
    "button"
);

impl Button {
    pub fn new(ui: &Ui, text: &str) -> Result<Self> {
        let ctx = ui.context();
        let text = c_string(text);
        Self::wrap(ctx, unsafe { (ctx.api.uiNewButton)(text.as_ptr()) })
    }

    pub fn text(&self) -> String {
        unsafe { self.ctx.take_text((self.api().uiButtonText)(self.raw())) }
    }

    pub fn set_text(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiButtonSetText)(self.raw(), text.as_ptr()) }
    }

    pub fn on_clicked(&self, f: impl FnMut(&Button) + 'static) {
        callback::register_event(self, "clicked", self.api().uiButtonOnClicked, f);
    }
}

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

control_handle!(
    /// A button that opens a color picker.
    ColorButton(uiColorButton),
    "color button"
);

impl ColorButton {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewColorButton)() })
    }

    pub fn color(&self) -> Color {
        let (mut r, mut g, mut b, mut a): (c_double, c_double, c_double, c_double) = (0.0, 0.0, 0.0, 0.0);
        unsafe { (self.api().uiColorButtonColor)(self.raw(), &mut r, &mut g, &mut b, &mut a) };
        Color { r, g, b, a }
    }

    pub fn set_color(&self, color: Color) {
        unsafe { (self.api().uiColorButtonSetColor)(self.raw(), color.r, color.g, color.b, color.a) }
    }

    pub fn on_changed(&self, f: impl FnMut(&ColorButton) + 'static) {
        callback::register_event(self, "changed", self.api().uiColorButtonOnChanged, f);
    }
}

/// Slant of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Italic {
    Normal,
    Oblique,
    Italic,
}

impl Italic {
    fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Oblique,
            2 => Self::Italic,
            _ => Self::Normal,
        }
    }
}

/// Width of a font, from ultra condensed (0) to ultra expanded (8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stretch {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

impl Stretch {
    fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::UltraCondensed,
            1 => Self::ExtraCondensed,
            2 => Self::Condensed,
            3 => Self::SemiCondensed,
            5 => Self::SemiExpanded,
            6 => Self::Expanded,
            7 => Self::ExtraExpanded,
            8 => Self::UltraExpanded,
            _ => Self::Normal,
        }
    }
}

/// The font chosen in a [`FontButton`]
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    pub size: f64,
    /// CSS-style weight, 400 is regular and 700 bold
    pub weight: u32,
    pub italic: Italic,
    pub stretch: Stretch,
}

control_handle!(
    /// A button that opens a font picker. The default font is OS-defined.
    FontButton(uiFontButton),
    "font button"
);

impl FontButton {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewFontButton)() })
    }

    pub fn font(&self) -> FontDescriptor {
        let mut desc = ffi::uiFontDescriptor {
            Family: std::ptr::null_mut(),
            Size: 0.0,
            Weight: 0,
            Italic: 0,
            Stretch: 0,
        };
        unsafe { (self.api().uiFontButtonFont)(self.raw(), &mut desc) };

        let family = if desc.Family.is_null() {
            String::new()
        } else {
            unsafe { CStr::from_ptr(desc.Family) }.to_string_lossy().into_owned()
        };
        let font = FontDescriptor {
            family,
            size: desc.Size,
            weight: desc.Weight,
            italic: Italic::from_raw(desc.Italic),
            stretch: Stretch::from_raw(desc.Stretch),
        };

        unsafe { (self.api().uiFreeFontButtonFont)(&mut desc) };
        font
    }

    pub fn on_changed(&self, f: impl FnMut(&FontButton) + 'static) {
        callback::register_event(self, "changed", self.api().uiFontButtonOnChanged, f);
    }
}
