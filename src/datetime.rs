//! Date and time pickers
//!
//! libui exchanges times as a C `struct tm`. [`DateTime`] is the calendar
//! view of it: one-based month, full year, no weekday or day-of-year (libui
//! leaves those undefined).

use crate::callback;
use crate::control::{control_handle, sealed::Handle};
use crate::error::Result;
use crate::ui::Ui;

/// A broken-down local date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTime {
    pub year: i32,
    /// 1 to 12
    pub month: i32,
    /// 1 to 31
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl DateTime {
    fn from_tm(tm: &libc::tm) -> Self {
        Self {
            year: tm.tm_year + 1900,
            month: tm.tm_mon + 1,
            day: tm.tm_mday,
            hour: tm.tm_hour,
            minute: tm.tm_min,
            second: tm.tm_sec,
        }
    }

    fn to_tm(self) -> libc::tm {
        // All-zero is a valid tm; the platform-specific tail fields stay unset
        let mut tm: libc::tm = unsafe { std::mem::zeroed() };
        tm.tm_year = self.year - 1900;
        tm.tm_mon = self.month - 1;
        tm.tm_mday = self.day;
        tm.tm_hour = self.hour;
        tm.tm_min = self.minute;
        tm.tm_sec = self.second;
        tm.tm_isdst = -1;
        tm
    }
}

control_handle!(
    /// A widget to edit dates and/or times.
    DateTimePicker(uiDateTimePicker),
    "date/time picker"
);

impl DateTimePicker {
    /// Edit both date and time.
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewDateTimePicker)() })
    }

    /// Edit the date only.
    pub fn date(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewDatePicker)() })
    }

    /// Edit the time only.
    pub fn time(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewTimePicker)() })
    }

    pub fn date_time(&self) -> DateTime {
        let mut tm: libc::tm = unsafe { std::mem::zeroed() };
        unsafe { (self.api().uiDateTimePickerTime)(self.raw(), &mut tm) };
        DateTime::from_tm(&tm)
    }

    pub fn set_date_time(&self, value: &DateTime) {
        let tm = value.to_tm();
        unsafe { (self.api().uiDateTimePickerSetTime)(self.raw(), &tm) }
    }

    pub fn on_changed(&self, f: impl FnMut(&DateTimePicker) + 'static) {
        callback::register_event(self, "changed", self.api().uiDateTimePickerOnChanged, f);
    }
}
