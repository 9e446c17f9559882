//! Raw libui C ABI
//!
//! Opaque control types, the few plain-data structs libui exchanges by
//! pointer, and [`NativeApi`]: one function pointer per native entry point.
//! Every handle in this crate reaches the toolkit only through this table, so
//! whoever builds the table decides what "native" means (the linked system
//! library, a dlopen'ed one, or an in-process double).

#![allow(non_camel_case_types, non_snake_case)]

use std::ffi::{c_char, c_double, c_int, c_uint, c_void};

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque!(
    uiControl,
    uiWindow,
    uiForm,
    uiGrid,
    uiBox,
    uiTab,
    uiGroup,
    uiEntry,
    uiMultilineEntry,
    uiCheckbox,
    uiCombobox,
    uiEditableCombobox,
    uiSpinbox,
    uiSlider,
    uiRadioButtons,
    uiDateTimePicker,
    uiLabel,
    uiSeparator,
    uiProgressBar,
    uiButton,
    uiColorButton,
    uiFontButton,
);

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct uiInitOptions {
    pub Size: usize,
}

#[repr(C)]
#[derive(Debug)]
pub struct uiFontDescriptor {
    pub Family: *mut c_char,
    pub Size: c_double,
    pub Weight: c_uint,
    pub Italic: c_uint,
    pub Stretch: c_uint,
}

pub type ShouldQuitFn = unsafe extern "C" fn(data: *mut c_void) -> c_int;
pub type ClosingFn = unsafe extern "C" fn(w: *mut uiWindow, data: *mut c_void) -> c_int;

/// Notification callback shape shared by every "something changed" event.
pub type EventFn<T> = unsafe extern "C" fn(sender: *mut T, data: *mut c_void);

macro_rules! native_api {
    ($(fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;)*) => {
        /// Function table covering the libui entry points this crate uses.
        #[derive(Clone, Copy)]
        pub struct NativeApi {
            $(pub $name: unsafe extern "C" fn($($ty),*) $(-> $ret)?,)*
        }

        #[cfg(feature = "linked")]
        mod linked {
            use super::*;

            #[link(name = "ui")]
            extern "C" {
                $(pub fn $name($($arg: $ty),*) $(-> $ret)?;)*
            }
        }

        #[cfg(feature = "linked")]
        impl NativeApi {
            /// Table backed by the system libui this crate was linked against.
            pub fn linked() -> Self {
                Self {
                    $($name: linked::$name,)*
                }
            }
        }
    };
}

native_api! {
    // Toolkit lifecycle
    fn uiInit(options: *mut uiInitOptions) -> *const c_char;
    fn uiUninit();
    fn uiFreeInitError(err: *const c_char);
    fn uiMain();
    fn uiMainSteps();
    fn uiMainStep(wait: c_int) -> c_int;
    fn uiQuit();
    fn uiOnShouldQuit(f: ShouldQuitFn, data: *mut c_void);
    fn uiFreeText(text: *mut c_char);

    // Generic control interface
    fn uiControlDestroy(c: *mut uiControl);
    fn uiControlHandle(c: *mut uiControl) -> usize;
    fn uiControlToplevel(c: *mut uiControl) -> c_int;
    fn uiControlVisible(c: *mut uiControl) -> c_int;
    fn uiControlShow(c: *mut uiControl);
    fn uiControlHide(c: *mut uiControl);
    fn uiControlEnabled(c: *mut uiControl) -> c_int;
    fn uiControlEnable(c: *mut uiControl);
    fn uiControlDisable(c: *mut uiControl);

    // Window
    fn uiNewWindow(title: *const c_char, width: c_int, height: c_int, has_menubar: c_int) -> *mut uiWindow;
    fn uiWindowTitle(w: *mut uiWindow) -> *mut c_char;
    fn uiWindowSetTitle(w: *mut uiWindow, title: *const c_char);
    fn uiWindowContentSize(w: *mut uiWindow, width: *mut c_int, height: *mut c_int);
    fn uiWindowSetContentSize(w: *mut uiWindow, width: c_int, height: c_int);
    fn uiWindowFullscreen(w: *mut uiWindow) -> c_int;
    fn uiWindowSetFullscreen(w: *mut uiWindow, fullscreen: c_int);
    fn uiWindowBorderless(w: *mut uiWindow) -> c_int;
    fn uiWindowSetBorderless(w: *mut uiWindow, borderless: c_int);
    fn uiWindowMargined(w: *mut uiWindow) -> c_int;
    fn uiWindowSetMargined(w: *mut uiWindow, margined: c_int);
    fn uiWindowSetChild(w: *mut uiWindow, child: *mut uiControl);
    fn uiWindowOnClosing(w: *mut uiWindow, f: ClosingFn, data: *mut c_void);
    fn uiWindowOnContentSizeChanged(w: *mut uiWindow, f: EventFn<uiWindow>, data: *mut c_void);

    // Form
    fn uiNewForm() -> *mut uiForm;
    fn uiFormAppend(f: *mut uiForm, label: *const c_char, c: *mut uiControl, stretchy: c_int);
    fn uiFormDelete(f: *mut uiForm, index: c_int);
    fn uiFormPadded(f: *mut uiForm) -> c_int;
    fn uiFormSetPadded(f: *mut uiForm, padded: c_int);

    // Grid
    fn uiNewGrid() -> *mut uiGrid;
    fn uiGridAppend(
        g: *mut uiGrid,
        c: *mut uiControl,
        left: c_int,
        top: c_int,
        xspan: c_int,
        yspan: c_int,
        hexpand: c_int,
        halign: c_uint,
        vexpand: c_int,
        valign: c_uint,
    );
    fn uiGridInsertAt(
        g: *mut uiGrid,
        c: *mut uiControl,
        existing: *mut uiControl,
        at: c_uint,
        xspan: c_int,
        yspan: c_int,
        hexpand: c_int,
        halign: c_uint,
        vexpand: c_int,
        valign: c_uint,
    );
    fn uiGridPadded(g: *mut uiGrid) -> c_int;
    fn uiGridSetPadded(g: *mut uiGrid, padded: c_int);

    // Box
    fn uiNewHorizontalBox() -> *mut uiBox;
    fn uiNewVerticalBox() -> *mut uiBox;
    fn uiBoxAppend(b: *mut uiBox, child: *mut uiControl, stretchy: c_int);
    fn uiBoxDelete(b: *mut uiBox, index: c_int);
    fn uiBoxPadded(b: *mut uiBox) -> c_int;
    fn uiBoxSetPadded(b: *mut uiBox, padded: c_int);

    // Tab
    fn uiNewTab() -> *mut uiTab;
    fn uiTabAppend(t: *mut uiTab, name: *const c_char, c: *mut uiControl);
    fn uiTabInsertAt(t: *mut uiTab, name: *const c_char, before: c_int, c: *mut uiControl);
    fn uiTabDelete(t: *mut uiTab, index: c_int);
    fn uiTabNumPages(t: *mut uiTab) -> c_int;
    fn uiTabMargined(t: *mut uiTab, page: c_int) -> c_int;
    fn uiTabSetMargined(t: *mut uiTab, page: c_int, margined: c_int);

    // Group
    fn uiNewGroup(title: *const c_char) -> *mut uiGroup;
    fn uiGroupTitle(g: *mut uiGroup) -> *mut c_char;
    fn uiGroupSetTitle(g: *mut uiGroup, title: *const c_char);
    fn uiGroupSetChild(g: *mut uiGroup, c: *mut uiControl);
    fn uiGroupMargined(g: *mut uiGroup) -> c_int;
    fn uiGroupSetMargined(g: *mut uiGroup, margined: c_int);

    // Entry
    fn uiNewEntry() -> *mut uiEntry;
    fn uiNewPasswordEntry() -> *mut uiEntry;
    fn uiNewSearchEntry() -> *mut uiEntry;
    fn uiEntryText(e: *mut uiEntry) -> *mut c_char;
    fn uiEntrySetText(e: *mut uiEntry, text: *const c_char);
    fn uiEntryReadOnly(e: *mut uiEntry) -> c_int;
    fn uiEntrySetReadOnly(e: *mut uiEntry, readonly: c_int);
    fn uiEntryOnChanged(e: *mut uiEntry, f: EventFn<uiEntry>, data: *mut c_void);

    // MultilineEntry
    fn uiNewMultilineEntry() -> *mut uiMultilineEntry;
    fn uiNewNonWrappingMultilineEntry() -> *mut uiMultilineEntry;
    fn uiMultilineEntryText(e: *mut uiMultilineEntry) -> *mut c_char;
    fn uiMultilineEntrySetText(e: *mut uiMultilineEntry, text: *const c_char);
    fn uiMultilineEntryAppend(e: *mut uiMultilineEntry, text: *const c_char);
    fn uiMultilineEntryReadOnly(e: *mut uiMultilineEntry) -> c_int;
    fn uiMultilineEntrySetReadOnly(e: *mut uiMultilineEntry, readonly: c_int);
    fn uiMultilineEntryOnChanged(e: *mut uiMultilineEntry, f: EventFn<uiMultilineEntry>, data: *mut c_void);

    // Checkbox
    fn uiNewCheckbox(text: *const c_char) -> *mut uiCheckbox;
    fn uiCheckboxText(c: *mut uiCheckbox) -> *mut c_char;
    fn uiCheckboxSetText(c: *mut uiCheckbox, text: *const c_char);
    fn uiCheckboxChecked(c: *mut uiCheckbox) -> c_int;
    fn uiCheckboxSetChecked(c: *mut uiCheckbox, checked: c_int);
    fn uiCheckboxOnToggled(c: *mut uiCheckbox, f: EventFn<uiCheckbox>, data: *mut c_void);

    // Combobox
    fn uiNewCombobox() -> *mut uiCombobox;
    fn uiComboboxAppend(c: *mut uiCombobox, text: *const c_char);
    fn uiComboboxSelected(c: *mut uiCombobox) -> c_int;
    fn uiComboboxSetSelected(c: *mut uiCombobox, n: c_int);
    fn uiComboboxOnSelected(c: *mut uiCombobox, f: EventFn<uiCombobox>, data: *mut c_void);

    // EditableCombobox
    fn uiNewEditableCombobox() -> *mut uiEditableCombobox;
    fn uiEditableComboboxAppend(c: *mut uiEditableCombobox, text: *const c_char);
    fn uiEditableComboboxText(c: *mut uiEditableCombobox) -> *mut c_char;
    fn uiEditableComboboxSetText(c: *mut uiEditableCombobox, text: *const c_char);
    fn uiEditableComboboxOnChanged(c: *mut uiEditableCombobox, f: EventFn<uiEditableCombobox>, data: *mut c_void);

    // Spinbox
    fn uiNewSpinbox(min: c_int, max: c_int) -> *mut uiSpinbox;
    fn uiSpinboxValue(s: *mut uiSpinbox) -> c_int;
    fn uiSpinboxSetValue(s: *mut uiSpinbox, value: c_int);
    fn uiSpinboxOnChanged(s: *mut uiSpinbox, f: EventFn<uiSpinbox>, data: *mut c_void);

    // Slider
    fn uiNewSlider(min: c_int, max: c_int) -> *mut uiSlider;
    fn uiSliderValue(s: *mut uiSlider) -> c_int;
    fn uiSliderSetValue(s: *mut uiSlider, value: c_int);
    fn uiSliderOnChanged(s: *mut uiSlider, f: EventFn<uiSlider>, data: *mut c_void);

    // RadioButtons
    fn uiNewRadioButtons() -> *mut uiRadioButtons;
    fn uiRadioButtonsAppend(r: *mut uiRadioButtons, text: *const c_char);
    fn uiRadioButtonsSelected(r: *mut uiRadioButtons) -> c_int;
    fn uiRadioButtonsSetSelected(r: *mut uiRadioButtons, n: c_int);
    fn uiRadioButtonsOnSelected(r: *mut uiRadioButtons, f: EventFn<uiRadioButtons>, data: *mut c_void);

    // DateTimePicker
    fn uiNewDateTimePicker() -> *mut uiDateTimePicker;
    fn uiNewDatePicker() -> *mut uiDateTimePicker;
    fn uiNewTimePicker() -> *mut uiDateTimePicker;
    fn uiDateTimePickerTime(d: *mut uiDateTimePicker, time: *mut libc::tm);
    fn uiDateTimePickerSetTime(d: *mut uiDateTimePicker, time: *const libc::tm);
    fn uiDateTimePickerOnChanged(d: *mut uiDateTimePicker, f: EventFn<uiDateTimePicker>, data: *mut c_void);

    // Label
    fn uiNewLabel(text: *const c_char) -> *mut uiLabel;
    fn uiLabelText(l: *mut uiLabel) -> *mut c_char;
    fn uiLabelSetText(l: *mut uiLabel, text: *const c_char);

    // Separator
    fn uiNewHorizontalSeparator() -> *mut uiSeparator;
    fn uiNewVerticalSeparator() -> *mut uiSeparator;

    // ProgressBar
    fn uiNewProgressBar() -> *mut uiProgressBar;
    fn uiProgressBarValue(p: *mut uiProgressBar) -> c_int;
    fn uiProgressBarSetValue(p: *mut uiProgressBar, n: c_int);

    // Button
    fn uiNewButton(text: *const c_char) -> *mut uiButton;
    fn uiButtonText(b: *mut uiButton) -> *mut c_char;
    fn uiButtonSetText(b: *mut uiButton, text: *const c_char);
    fn uiButtonOnClicked(b: *mut uiButton, f: EventFn<uiButton>, data: *mut c_void);

    // ColorButton
    fn uiNewColorButton() -> *mut uiColorButton;
    fn uiColorButtonColor(b: *mut uiColorButton, r: *mut c_double, g: *mut c_double, bl: *mut c_double, a: *mut c_double);
    fn uiColorButtonSetColor(b: *mut uiColorButton, r: c_double, g: c_double, bl: c_double, a: c_double);
    fn uiColorButtonOnChanged(b: *mut uiColorButton, f: EventFn<uiColorButton>, data: *mut c_void);

    // FontButton
    fn uiNewFontButton() -> *mut uiFontButton;
    fn uiFontButtonFont(b: *mut uiFontButton, desc: *mut uiFontDescriptor);
    fn uiFreeFontButtonFont(desc: *mut uiFontDescriptor);
    fn uiFontButtonOnChanged(b: *mut uiFontButton, f: EventFn<uiFontButton>, data: *mut c_void);
}
