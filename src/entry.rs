//! Text entry widgets

use crate::callback;
use crate::control::{control_handle, sealed::Handle};
use crate::error::Result;
use crate::ui::{c_bool, c_string, Ui};

control_handle!(
    /// A single line text entry.
    Entry(uiEntry),
    "entry"
);

impl Entry {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewEntry)() })
    }

    /// An entry that masks its input, for passwords and other secrets.
    pub fn password(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewPasswordEntry)() })
    }

    /// An entry styled as a search field.
    pub fn search(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewSearchEntry)() })
    }

    pub fn text(&self) -> String {
        unsafe { self.ctx.take_text((self.api().uiEntryText)(self.raw())) }
    }

    pub fn set_text(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiEntrySetText)(self.raw(), text.as_ptr()) }
    }

    /// Whether the user is prevented from editing. Defaults to `false`.
    pub fn read_only(&self) -> bool {
        unsafe { (self.api().uiEntryReadOnly)(self.raw()) != 0 }
    }

    pub fn set_read_only(&self, read_only: bool) {
        unsafe { (self.api().uiEntrySetReadOnly)(self.raw(), c_bool(read_only)) }
    }

    /// Called whenever the user edits the text.
    pub fn on_changed(&self, f: impl FnMut(&Entry) + 'static) {
        callback::register_event(self, "changed", self.api().uiEntryOnChanged, f);
    }
}

control_handle!(
    /// A multi line text entry.
    MultilineEntry(uiMultilineEntry),
    "multiline entry"
);

impl MultilineEntry {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewMultilineEntry)() })
    }

    /// A multi line entry that scrolls horizontally instead of wrapping.
    pub fn non_wrapping(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewNonWrappingMultilineEntry)() })
    }

    pub fn text(&self) -> String {
        unsafe { self.ctx.take_text((self.api().uiMultilineEntryText)(self.raw())) }
    }

    pub fn set_text(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiMultilineEntrySetText)(self.raw(), text.as_ptr()) }
    }

    pub fn append(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiMultilineEntryAppend)(self.raw(), text.as_ptr()) }
    }

    pub fn read_only(&self) -> bool {
        unsafe { (self.api().uiMultilineEntryReadOnly)(self.raw()) != 0 }
    }

    pub fn set_read_only(&self, read_only: bool) {
        unsafe { (self.api().uiMultilineEntrySetReadOnly)(self.raw(), c_bool(read_only)) }
    }

    pub fn on_changed(&self, f: impl FnMut(&MultilineEntry) + 'static) {
        callback::register_event(self, "changed", self.api().uiMultilineEntryOnChanged, f);
    }
}
