//! Layout containers: forms, grids, boxes, tabs and groups

use crate::control::{control_handle, sealed::Handle, Control};
use crate::error::Result;
use crate::ui::{c_bool, c_string, Ui};

/// Alignment of a control inside its grid cell
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Fill = 0,
    Start = 1,
    Center = 2,
    End = 3,
}

/// Placement relative to an existing grid child
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum At {
    Leading = 0,
    Top = 1,
    Trailing = 2,
    Bottom = 3,
}

/// Span, expansion and alignment of a grid child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub xspan: i32,
    pub yspan: i32,
    pub hexpand: bool,
    pub halign: Align,
    pub vexpand: bool,
    pub valign: Align,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            xspan: 1,
            yspan: 1,
            hexpand: false,
            halign: Align::Fill,
            vexpand: false,
            valign: Align::Fill,
        }
    }
}

control_handle!(
    /// A container that organizes children as labeled fields.
    Form(uiForm),
    "form"
);

impl Form {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewForm)() })
    }

    /// If true, the container inserts some space between children.
    pub fn padded(&self) -> bool {
        unsafe { (self.api().uiFormPadded)(self.raw()) != 0 }
    }

    pub fn set_padded(&self, padded: bool) {
        unsafe { (self.api().uiFormSetPadded)(self.raw(), c_bool(padded)) }
    }

    pub fn append(&self, label: &str, child: &impl Control, stretchy: bool) {
        let label = c_string(label);
        unsafe {
            (self.api().uiFormAppend)(self.raw(), label.as_ptr(), child.as_raw(), c_bool(stretchy))
        }
    }

    pub fn delete(&self, index: i32) {
        unsafe { (self.api().uiFormDelete)(self.raw(), index) }
    }
}

control_handle!(
    /// A container that places each child at an explicit cell.
    Grid(uiGrid),
    "grid"
);

impl Grid {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewGrid)() })
    }

    pub fn padded(&self) -> bool {
        unsafe { (self.api().uiGridPadded)(self.raw()) != 0 }
    }

    pub fn set_padded(&self, padded: bool) {
        unsafe { (self.api().uiGridSetPadded)(self.raw(), c_bool(padded)) }
    }

    /// Place `child` with its top-left corner at (`left`, `top`).
    pub fn append(&self, child: &impl Control, left: i32, top: i32, cell: GridCell) {
        unsafe {
            (self.api().uiGridAppend)(
                self.raw(),
                child.as_raw(),
                left,
                top,
                cell.xspan,
                cell.yspan,
                c_bool(cell.hexpand),
                cell.halign as u32,
                c_bool(cell.vexpand),
                cell.valign as u32,
            )
        }
    }

    /// Place `child` next to `existing`, which must already be in the grid.
    pub fn insert_at(&self, child: &impl Control, existing: &impl Control, at: At, cell: GridCell) {
        unsafe {
            (self.api().uiGridInsertAt)(
                self.raw(),
                child.as_raw(),
                existing.as_raw(),
                at as u32,
                cell.xspan,
                cell.yspan,
                c_bool(cell.hexpand),
                cell.halign as u32,
                c_bool(cell.vexpand),
                cell.valign as u32,
            )
        }
    }
}

control_handle!(
    /// A container that stacks its children horizontally or vertically.
    LinearBox(uiBox),
    "box"
);

impl LinearBox {
    pub fn horizontal(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewHorizontalBox)() })
    }

    pub fn vertical(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewVerticalBox)() })
    }

    /// If true, the container inserts some space between children. Defaults to `false`.
    pub fn padded(&self) -> bool {
        unsafe { (self.api().uiBoxPadded)(self.raw()) != 0 }
    }

    pub fn set_padded(&self, padded: bool) {
        unsafe { (self.api().uiBoxSetPadded)(self.raw(), c_bool(padded)) }
    }

    /// Add `child` at the end; stretchy children share the leftover space.
    pub fn append(&self, child: &impl Control, stretchy: bool) {
        unsafe { (self.api().uiBoxAppend)(self.raw(), child.as_raw(), c_bool(stretchy)) }
    }

    pub fn delete(&self, index: i32) {
        unsafe { (self.api().uiBoxDelete)(self.raw(), index) }
    }
}

control_handle!(
    /// A container that shows each child on its own page.
    Tab(uiTab),
    "tab"
);

impl Tab {
    pub fn new(ui: &Ui) -> Result<Self> {
        let ctx = ui.context();
        Self::wrap(ctx, unsafe { (ctx.api.uiNewTab)() })
    }

    pub fn append(&self, name: &str, child: &impl Control) {
        let name = c_string(name);
        unsafe { (self.api().uiTabAppend)(self.raw(), name.as_ptr(), child.as_raw()) }
    }

    pub fn insert_at(&self, name: &str, before: i32, child: &impl Control) {
        let name = c_string(name);
        unsafe { (self.api().uiTabInsertAt)(self.raw(), name.as_ptr(), before, child.as_raw()) }
    }

    pub fn delete(&self, index: i32) {
        unsafe { (self.api().uiTabDelete)(self.raw(), index) }
    }

    pub fn num_pages(&self) -> i32 {
        unsafe { (self.api().uiTabNumPages)(self.raw()) }
    }

    pub fn margined(&self, page: i32) -> bool {
        unsafe { (self.api().uiTabMargined)(self.raw(), page) != 0 }
    }

    pub fn set_margined(&self, page: i32, margined: bool) {
        unsafe { (self.api().uiTabSetMargined)(self.raw(), page, c_bool(margined)) }
    }
}

control_handle!(
    /// A captioned frame around a single child.
    Group(uiGroup),
    "group"
);

impl Group {
    pub fn new(ui: &Ui, title: &str) -> Result<Self> {
        let ctx = ui.context();
        let title = c_string(title);
        Self::wrap(ctx, unsafe { (ctx.api.uiNewGroup)(title.as_ptr()) })
    }

    /// The caption of the group.
    pub fn title(&self) -> String {
        unsafe { self.ctx.take_text((self.api().uiGroupTitle)(self.raw())) }
    }

    pub fn set_title(&self, title: &str) {
        let title = c_string(title);
        unsafe { (self.api().uiGroupSetTitle)(self.raw(), title.as_ptr()) }
    }

    pub fn margined(&self) -> bool {
        unsafe { (self.api().uiGroupMargined)(self.raw()) != 0 }
    }

    pub fn set_margined(&self, margined: bool) {
        unsafe { (self.api().uiGroupSetMargined)(self.raw(), c_bool(margined)) }
    }

    pub fn set_child(&self, child: &impl Control) {
        unsafe { (self.api().uiGroupSetChild)(self.raw(), child.as_raw()) }
    }
}
