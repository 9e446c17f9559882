//! Static widgets: labels and separators

use crate::control::{control_handle, sealed::Handle};
use crate::error::Result;
use crate::ui::{c_string, Ui};

control_handle!(
    /// A static text label.
    Label(uiLabel),
    "label"
);

impl Label {
    pub fn new(ui: &Ui, text: &str) -> Result<Self> {
        let ctx = ui.context();
        let text = c_string(text);
        Self::wrap(ctx, unsafe { (ctx.api.uiNewLabel)(text.as_ptr()) })
    }

    pub fn text(&self) -> String {
        unsafe { self.ctx.take_text((self.api().uiLabelText)(self.raw())) }
    }

    pub fn set_text(&self, text: &str) {
        let text = c_string(text);
        unsafe { (self.api().uiLabelSetText)(self.raw(), text.as_ptr()) }
    }
}

control_handle!(
    /// A horizontal or vertical line between widgets.
    Separator(uiSeparator),
    "separator"
);

impl Separator {
    pub fn horizontal(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewHorizontalSeparator)() })
    }

    pub fn vertical(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewVerticalSeparator)() })
    }
}
