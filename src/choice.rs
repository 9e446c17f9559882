//! Selection widgets: checkboxes, combo boxes and radio buttons
//!
//! Selection indices are passed through untouched; `-1` means nothing is
//! selected, and out-of-range values are whatever the native toolkit makes
//! of them.

use crate::callback;
use crate::control::{control_handle, sealed::Handle};
use crate::error::Result;
use crate::ui::{c_bool, c_string, Ui};

control_handle!(
    /// A checkbox with a text caption.
    Checkbox(uiCheckbox),
    "checkbox"
);

impl Checkbox {
    pub fn new(ui: &Ui, text: &str) -> Result<Self> {
        let ctx = ui.context();
        let text = c_string(text);
        Self::wrap(ctx, unsafe { (ctx.api.uiNewCheckbox)(text.as_ptr()) })
    }

    pub fn text(&self) -> String {
        unsafe { self.ctx.take_text((self.api().uiCheckboxText)(self.raw())) }
    }

    pub fn set_text(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiCheckboxSetText)(self.raw(), text.as_ptr()) }
    }

    /// Defaults to `false`.
    pub fn checked(&self) -> bool {
        unsafe { (self.api().uiCheckboxChecked)(self.raw()) != 0 }
    }

    pub fn set_checked(&self, checked: bool) {
        unsafe { (self.api().uiCheckboxSetChecked)(self.raw(), c_bool(checked)) }
    }

    pub fn on_toggled(&self, f: impl FnMut(&Checkbox) + 'static) {
        callback::register_event(self, "toggled", self.api().uiCheckboxOnToggled, f);
    }
}

control_handle!(
    /// A drop-down list that only allows picking one of its items.
    Combobox(uiCombobox),
    "combobox"
);

impl Combobox {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewCombobox)() })
    }

    pub fn append(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiComboboxAppend)(self.raw(), text.as_ptr()) }
    }

    pub fn selected(&self) -> i32 {
        unsafe { (self.api().uiComboboxSelected)(self.raw()) }
    }

    pub fn set_selected(&self, index: i32) {
        unsafe { (self.api().uiComboboxSetSelected)(self.raw(), index) }
    }

    pub fn on_selected(&self, f: impl FnMut(&Combobox) + 'static) {
        callback::register_event(self, "selected", self.api().uiComboboxOnSelected, f);
    }
}

control_handle!(
    /// A drop-down list that also accepts free text.
    EditableCombobox(uiEditableCombobox),
    "editable combobox"
);

impl EditableCombobox {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewEditableCombobox)() })
    }

    pub fn append(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiEditableComboboxAppend)(self.raw(), text.as_ptr()) }
    }

    /// The typed text, or the text of the picked item.
    pub fn text(&self) -> String {
        unsafe { self.ctx.take_text((self.api().uiEditableComboboxText)(self.raw())) }
    }

    pub fn set_text(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiEditableComboboxSetText)(self.raw(), text.as_ptr()) }
    }

    pub fn on_changed(&self, f: impl FnMut(&EditableCombobox) + 'static) {
        callback::register_event(self, "changed", self.api().uiEditableComboboxOnChanged, f);
    }
}

control_handle!(
    /// A group of mutually exclusive options.
    RadioButtons(uiRadioButtons),
    "radio buttons"
);

impl RadioButtons {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewRadioButtons)() })
    }

    pub fn append(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiRadioButtonsAppend)(self.raw(), text.as_ptr()) }
    }

    /// Index of the chosen option.
    pub fn selected(&self) -> i32 {
        unsafe { (self.api().uiRadioButtonsSelected)(self.raw()) }
    }

    pub fn set_selected(&self, index: i32) {
        unsafe { (self.api().uiRadioButtonsSetSelected)(self.raw(), index) }
    }

    pub fn on_selected(&self, f: impl FnMut(&RadioButtons) + 'static) {
        callback::register_event(self, "selected", self.api().uiRadioButtonsOnSelected, f);
    }
}
