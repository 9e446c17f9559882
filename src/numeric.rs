//! Numeric widgets: spinbox, slider and progress bar
//!
//! Values go straight through. libui clamps spinbox and slider values to
//! their range and starts them at the minimum.

use crate::callback;
use crate::control::{control_handle, sealed::Handle};
use crate::error::Result;
use crate::ui::Ui;

control_handle!(
    /// An entry for integers with up/down arrows.
    Spinbox(uiSpinbox),
    "spinbox"
);

impl Spinbox {
    pub fn new(ui: &Ui, min: i32, max: i32) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewSpinbox)(min, max) })
    }

    pub fn value(&self) -> i32 {
        unsafe { (self.api().uiSpinboxValue)(self.raw()) }
    }

    pub fn set_value(&self, value: i32) {
        unsafe { (self.api().uiSpinboxSetValue)(self.raw(), value) }
    }

    pub fn on_changed(&self, f: impl FnMut(&Spinbox) + 'static) {
        callback::register_event(self, "changed", self.api().uiSpinboxOnChanged, f);
    }
}

control_handle!(
    /// A horizontal slider for integers.
    Slider(uiSlider),
    "slider"
);

impl Slider {
    pub fn new(ui: &Ui, min: i32, max: i32) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewSlider)(min, max) })
    }

    pub fn value(&self) -> i32 {
        unsafe { (self.api().uiSliderValue)(self.raw()) }
    }

    pub fn set_value(&self, value: i32) {
        unsafe { (self.api().uiSliderSetValue)(self.raw(), value) }
    }

    pub fn on_changed(&self, f: impl FnMut(&Slider) + 'static) {
        callback::register_event(self, "changed", self.api().uiSliderOnChanged, f);
    }
}

control_handle!(
    /// A progress bar from 0 to 100.
    ProgressBar(uiProgressBar),
    "progress bar"
);

impl ProgressBar {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewProgressBar)() })
    }

    pub fn value(&self) -> i32 {
        unsafe { (self.api().uiProgressBarValue)(self.raw()) }
    }

    /// Set to -1 for an indeterminate bar.
    pub fn set_value(&self, value: i32) {
        unsafe { (self.api().uiProgressBarSetValue)(self.raw(), value) }
    }
}
