//! In-process stand-in for libui used by the unit tests
//!
//! Every control is a heap-allocated [`FakeControl`] whose address doubles as
//! the native pointer. State that has to be steered from a test (forced
//! allocation failure, null strings, pending init errors) lives in a
//! thread-local, and the test harness runs each test on its own thread.

use crate::control::Control;
use crate::ffi::*;
use crate::ui::Ui;
use crate::window::Window;
use std::cell::RefCell;
use std::ffi::{c_char, c_double, c_int, c_uint, c_void, CStr, CString};
use std::ptr;

const READ_ONLY: usize = 0;
const PADDED: usize = 1;
const MARGINED: usize = 2;
const BORDERLESS: usize = 3;
const FULLSCREEN: usize = 4;
const CHECKED: usize = 5;

struct FakeControl {
    kind: &'static str,
    enabled: bool,
    visible: bool,
    flags: [bool; 6],
    text: CString,
    value: c_int,
    size: (c_int, c_int),
    items: Vec<CString>,
    children: Vec<*mut uiControl>,
    // (halign, valign) per grid child, parallel to `children`
    aligns: Vec<(c_uint, c_uint)>,
    inserted_at: Option<c_uint>,
    tab_margins: Vec<bool>,
    color: [c_double; 4],
    time: libc::tm,
    // (function address, user data)
    event: Option<(usize, *mut c_void)>,
    closing: Option<(usize, *mut c_void)>,
}

impl FakeControl {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            enabled: true,
            visible: true,
            flags: [false; 6],
            text: CString::default(),
            value: 0,
            size: (0, 0),
            items: Vec::new(),
            children: Vec::new(),
            aligns: Vec::new(),
            inserted_at: None,
            tab_margins: Vec::new(),
            color: [0.0; 4],
            time: unsafe { std::mem::zeroed() },
            event: None,
            closing: None,
        }
    }
}

#[derive(Default)]
struct FakeState {
    fail_next_alloc: bool,
    null_text: bool,
    outstanding_text: isize,
    init_error: Option<CString>,
    init_errors_freed: usize,
    destroyed: usize,
    main_runs: usize,
    quit: bool,
    should_quit: Option<(usize, *mut c_void)>,
}

thread_local! {
    static STATE: RefCell<FakeState> = RefCell::new(FakeState::default());
}

fn state<R>(f: impl FnOnce(&mut FakeState) -> R) -> R {
    STATE.with(|s| f(&mut s.borrow_mut()))
}

unsafe fn control<'a, T>(p: *mut T) -> &'a mut FakeControl {
    &mut *(p as *mut FakeControl)
}

fn short_kind<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

fn alloc<T>(fake: FakeControl) -> *mut T {
    if state(|s| std::mem::take(&mut s.fail_next_alloc)) {
        return ptr::null_mut();
    }
    Box::into_raw(Box::new(fake)) as *mut T
}

unsafe fn copy_c(text: *const c_char) -> CString {
    CStr::from_ptr(text).to_owned()
}

// Toolkit

unsafe extern "C" fn init(_options: *mut uiInitOptions) -> *const c_char {
    state(|s| s.init_error.as_ref().map_or(ptr::null(), |e| e.as_ptr()))
}

unsafe extern "C" fn free_init_error(_err: *const c_char) {
    state(|s| {
        s.init_error = None;
        s.init_errors_freed += 1;
    })
}

unsafe extern "C" fn noop() {}

unsafe extern "C" fn main_loop() {
    state(|s| s.main_runs += 1)
}

unsafe extern "C" fn main_step(_wait: c_int) -> c_int {
    state(|s| if s.quit { 0 } else { 1 })
}

unsafe extern "C" fn quit() {
    state(|s| s.quit = true)
}

unsafe extern "C" fn on_should_quit(f: ShouldQuitFn, data: *mut c_void) {
    state(|s| s.should_quit = Some((f as usize, data)))
}

unsafe extern "C" fn free_text(text: *mut c_char) {
    drop(CString::from_raw(text));
    state(|s| s.outstanding_text -= 1)
}

// Generic control

unsafe extern "C" fn destroy(c: *mut uiControl) {
    drop(Box::from_raw(c as *mut FakeControl));
    state(|s| s.destroyed += 1)
}

unsafe extern "C" fn handle(c: *mut uiControl) -> usize {
    c as usize
}

unsafe extern "C" fn toplevel(c: *mut uiControl) -> c_int {
    (control(c).kind == "uiWindow") as c_int
}

unsafe extern "C" fn visible(c: *mut uiControl) -> c_int {
    control(c).visible as c_int
}

unsafe extern "C" fn show(c: *mut uiControl) {
    control(c).visible = true
}

unsafe extern "C" fn hide(c: *mut uiControl) {
    control(c).visible = false
}

unsafe extern "C" fn enabled(c: *mut uiControl) -> c_int {
    control(c).enabled as c_int
}

unsafe extern "C" fn enable(c: *mut uiControl) {
    control(c).enabled = true
}

unsafe extern "C" fn disable(c: *mut uiControl) {
    control(c).enabled = false
}

// Constructors

unsafe extern "C" fn new_plain<T>() -> *mut T {
    alloc(FakeControl::new(short_kind::<T>()))
}

/// Comboboxes and radio buttons start with nothing selected.
unsafe extern "C" fn new_selector<T>() -> *mut T {
    let mut fake = FakeControl::new(short_kind::<T>());
    fake.value = -1;
    alloc(fake)
}

unsafe extern "C" fn new_with_text<T>(text: *const c_char) -> *mut T {
    let mut fake = FakeControl::new(short_kind::<T>());
    fake.text = copy_c(text);
    alloc(fake)
}

unsafe extern "C" fn new_ranged<T>(min: c_int, _max: c_int) -> *mut T {
    let mut fake = FakeControl::new(short_kind::<T>());
    fake.value = min;
    alloc(fake)
}

unsafe extern "C" fn new_window(
    title: *const c_char,
    width: c_int,
    height: c_int,
    has_menubar: c_int,
) -> *mut uiWindow {
    let mut fake = FakeControl::new("uiWindow");
    fake.text = copy_c(title);
    fake.size = (width, height);
    fake.value = has_menubar;
    fake.visible = false;
    alloc(fake)
}

// Properties

unsafe extern "C" fn get_text<T>(p: *mut T) -> *mut c_char {
    if state(|s| s.null_text) {
        return ptr::null_mut();
    }
    state(|s| s.outstanding_text += 1);
    control(p).text.clone().into_raw()
}

unsafe extern "C" fn set_text<T>(p: *mut T, text: *const c_char) {
    control(p).text = copy_c(text);
}

unsafe extern "C" fn get_flag<T, const F: usize>(p: *mut T) -> c_int {
    control(p).flags[F] as c_int
}

unsafe extern "C" fn set_flag<T, const F: usize>(p: *mut T, value: c_int) {
    control(p).flags[F] = value != 0;
}

unsafe extern "C" fn get_value<T>(p: *mut T) -> c_int {
    control(p).value
}

unsafe extern "C" fn set_value<T>(p: *mut T, value: c_int) {
    control(p).value = value;
}

unsafe extern "C" fn append_item<T>(p: *mut T, text: *const c_char) {
    control(p).items.push(copy_c(text));
}

unsafe extern "C" fn append_text<T>(p: *mut T, text: *const c_char) {
    let fake = control(p);
    let mut joined = fake.text.as_bytes().to_vec();
    joined.extend_from_slice(CStr::from_ptr(text).to_bytes());
    fake.text = CString::new(joined).unwrap();
}

unsafe extern "C" fn content_size(w: *mut uiWindow, width: *mut c_int, height: *mut c_int) {
    let (cw, ch) = control(w).size;
    *width = cw;
    *height = ch;
}

unsafe extern "C" fn set_content_size(w: *mut uiWindow, width: c_int, height: c_int) {
    control(w).size = (width, height);
}

// Children

unsafe extern "C" fn set_child<T>(p: *mut T, child: *mut uiControl) {
    control(p).children = vec![child];
}

unsafe extern "C" fn box_append(b: *mut uiBox, child: *mut uiControl, _stretchy: c_int) {
    control(b).children.push(child);
}

unsafe extern "C" fn delete_child<T>(p: *mut T, index: c_int) {
    let fake = control(p);
    fake.children.remove(index as usize);
    if fake.items.len() > index as usize {
        fake.items.remove(index as usize);
    }
    if fake.tab_margins.len() > index as usize {
        fake.tab_margins.remove(index as usize);
    }
}

unsafe extern "C" fn form_append(
    f: *mut uiForm,
    label: *const c_char,
    child: *mut uiControl,
    _stretchy: c_int,
) {
    let fake = control(f);
    fake.items.push(copy_c(label));
    fake.children.push(child);
}

#[allow(clippy::too_many_arguments)]
unsafe extern "C" fn grid_append(
    g: *mut uiGrid,
    child: *mut uiControl,
    _left: c_int,
    _top: c_int,
    _xspan: c_int,
    _yspan: c_int,
    _hexpand: c_int,
    halign: c_uint,
    _vexpand: c_int,
    valign: c_uint,
) {
    let fake = control(g);
    fake.children.push(child);
    fake.aligns.push((halign, valign));
}

#[allow(clippy::too_many_arguments)]
unsafe extern "C" fn grid_insert_at(
    g: *mut uiGrid,
    child: *mut uiControl,
    existing: *mut uiControl,
    at: c_uint,
    _xspan: c_int,
    _yspan: c_int,
    _hexpand: c_int,
    halign: c_uint,
    _vexpand: c_int,
    valign: c_uint,
) {
    let fake = control(g);
    let pos = fake
        .children
        .iter()
        .position(|&c| c == existing)
        .unwrap_or(fake.children.len());
    // Leading / Top go before the existing control, Trailing / Bottom after
    let index = if at <= 1 { pos } else { (pos + 1).min(fake.children.len()) };
    fake.children.insert(index, child);
    fake.aligns.insert(index.min(fake.aligns.len()), (halign, valign));
    fake.inserted_at = Some(at);
}

unsafe extern "C" fn tab_append(t: *mut uiTab, name: *const c_char, child: *mut uiControl) {
    let fake = control(t);
    fake.items.push(copy_c(name));
    fake.children.push(child);
    fake.tab_margins.push(false);
}

unsafe extern "C" fn tab_insert_at(
    t: *mut uiTab,
    name: *const c_char,
    before: c_int,
    child: *mut uiControl,
) {
    let fake = control(t);
    let at = before as usize;
    fake.items.insert(at, copy_c(name));
    fake.children.insert(at, child);
    fake.tab_margins.insert(at, false);
}

unsafe extern "C" fn tab_num_pages(t: *mut uiTab) -> c_int {
    control(t).children.len() as c_int
}

unsafe extern "C" fn tab_margined(t: *mut uiTab, page: c_int) -> c_int {
    control(t).tab_margins[page as usize] as c_int
}

unsafe extern "C" fn tab_set_margined(t: *mut uiTab, page: c_int, margined: c_int) {
    control(t).tab_margins[page as usize] = margined != 0;
}

// Values

unsafe extern "C" fn picker_time(d: *mut uiDateTimePicker, time: *mut libc::tm) {
    *time = control(d).time;
}

unsafe extern "C" fn picker_set_time(d: *mut uiDateTimePicker, time: *const libc::tm) {
    control(d).time = *time;
}

unsafe extern "C" fn color(
    b: *mut uiColorButton,
    r: *mut c_double,
    g: *mut c_double,
    bl: *mut c_double,
    a: *mut c_double,
) {
    let [cr, cg, cb, ca] = control(b).color;
    *r = cr;
    *g = cg;
    *bl = cb;
    *a = ca;
}

unsafe extern "C" fn set_color(b: *mut uiColorButton, r: c_double, g: c_double, bl: c_double, a: c_double) {
    control(b).color = [r, g, bl, a];
}

unsafe extern "C" fn font(_b: *mut uiFontButton, desc: *mut uiFontDescriptor) {
    state(|s| s.outstanding_text += 1);
    *desc = uiFontDescriptor {
        Family: CString::new("Sans").unwrap().into_raw(),
        Size: 12.0,
        Weight: 700,
        Italic: 2,
        Stretch: 4,
    };
}

unsafe extern "C" fn free_font(desc: *mut uiFontDescriptor) {
    drop(CString::from_raw((*desc).Family));
    (*desc).Family = ptr::null_mut();
    state(|s| s.outstanding_text -= 1)
}

// Callbacks

unsafe extern "C" fn on_event<T>(p: *mut T, f: EventFn<T>, data: *mut c_void) {
    control(p).event = Some((f as usize, data));
}

unsafe extern "C" fn on_closing(w: *mut uiWindow, f: ClosingFn, data: *mut c_void) {
    control(w).closing = Some((f as usize, data));
}

/// Function table wired to the fake toolkit.
pub(crate) fn api() -> NativeApi {
    NativeApi {
        uiInit: init,
        uiUninit: noop,
        uiFreeInitError: free_init_error,
        uiMain: main_loop,
        uiMainSteps: noop,
        uiMainStep: main_step,
        uiQuit: quit,
        uiOnShouldQuit: on_should_quit,
        uiFreeText: free_text,

        uiControlDestroy: destroy,
        uiControlHandle: handle,
        uiControlToplevel: toplevel,
        uiControlVisible: visible,
        uiControlShow: show,
        uiControlHide: hide,
        uiControlEnabled: enabled,
        uiControlEnable: enable,
        uiControlDisable: disable,

        uiNewWindow: new_window,
        uiWindowTitle: get_text::<uiWindow>,
        uiWindowSetTitle: set_text::<uiWindow>,
        uiWindowContentSize: content_size,
        uiWindowSetContentSize: set_content_size,
        uiWindowFullscreen: get_flag::<uiWindow, FULLSCREEN>,
        uiWindowSetFullscreen: set_flag::<uiWindow, FULLSCREEN>,
        uiWindowBorderless: get_flag::<uiWindow, BORDERLESS>,
        uiWindowSetBorderless: set_flag::<uiWindow, BORDERLESS>,
        uiWindowMargined: get_flag::<uiWindow, MARGINED>,
        uiWindowSetMargined: set_flag::<uiWindow, MARGINED>,
        uiWindowSetChild: set_child::<uiWindow>,
        uiWindowOnClosing: on_closing,
        uiWindowOnContentSizeChanged: on_event::<uiWindow>,

        uiNewForm: new_plain::<uiForm>,
        uiFormAppend: form_append,
        uiFormDelete: delete_child::<uiForm>,
        uiFormPadded: get_flag::<uiForm, PADDED>,
        uiFormSetPadded: set_flag::<uiForm, PADDED>,

        uiNewGrid: new_plain::<uiGrid>,
        uiGridAppend: grid_append,
        uiGridInsertAt: grid_insert_at,
        uiGridPadded: get_flag::<uiGrid, PADDED>,
        uiGridSetPadded: set_flag::<uiGrid, PADDED>,

        uiNewHorizontalBox: new_plain::<uiBox>,
        uiNewVerticalBox: new_plain::<uiBox>,
        uiBoxAppend: box_append,
        uiBoxDelete: delete_child::<uiBox>,
        uiBoxPadded: get_flag::<uiBox, PADDED>,
        uiBoxSetPadded: set_flag::<uiBox, PADDED>,

        uiNewTab: new_plain::<uiTab>,
        uiTabAppend: tab_append,
        uiTabInsertAt: tab_insert_at,
        uiTabDelete: delete_child::<uiTab>,
        uiTabNumPages: tab_num_pages,
        uiTabMargined: tab_margined,
        uiTabSetMargined: tab_set_margined,

        uiNewGroup: new_with_text::<uiGroup>,
        uiGroupTitle: get_text::<uiGroup>,
        uiGroupSetTitle: set_text::<uiGroup>,
        uiGroupSetChild: set_child::<uiGroup>,
        uiGroupMargined: get_flag::<uiGroup, MARGINED>,
        uiGroupSetMargined: set_flag::<uiGroup, MARGINED>,

        uiNewEntry: new_plain::<uiEntry>,
        uiNewPasswordEntry: new_plain::<uiEntry>,
        uiNewSearchEntry: new_plain::<uiEntry>,
        uiEntryText: get_text::<uiEntry>,
        uiEntrySetText: set_text::<uiEntry>,
        uiEntryReadOnly: get_flag::<uiEntry, READ_ONLY>,
        uiEntrySetReadOnly: set_flag::<uiEntry, READ_ONLY>,
        uiEntryOnChanged: on_event::<uiEntry>,

        uiNewMultilineEntry: new_plain::<uiMultilineEntry>,
        uiNewNonWrappingMultilineEntry: new_plain::<uiMultilineEntry>,
        uiMultilineEntryText: get_text::<uiMultilineEntry>,
        uiMultilineEntrySetText: set_text::<uiMultilineEntry>,
        uiMultilineEntryAppend: append_text::<uiMultilineEntry>,
        uiMultilineEntryReadOnly: get_flag::<uiMultilineEntry, READ_ONLY>,
        uiMultilineEntrySetReadOnly: set_flag::<uiMultilineEntry, READ_ONLY>,
        uiMultilineEntryOnChanged: on_event::<uiMultilineEntry>,

        uiNewCheckbox: new_with_text::<uiCheckbox>,
        uiCheckboxText: get_text::<uiCheckbox>,
        uiCheckboxSetText: set_text::<uiCheckbox>,
        uiCheckboxChecked: get_flag::<uiCheckbox, CHECKED>,
        uiCheckboxSetChecked: set_flag::<uiCheckbox, CHECKED>,
        uiCheckboxOnToggled: on_event::<uiCheckbox>,

        uiNewCombobox: new_selector::<uiCombobox>,
        uiComboboxAppend: append_item::<uiCombobox>,
        uiComboboxSelected: get_value::<uiCombobox>,
        uiComboboxSetSelected: set_value::<uiCombobox>,
        uiComboboxOnSelected: on_event::<uiCombobox>,

        uiNewEditableCombobox: new_plain::<uiEditableCombobox>,
        uiEditableComboboxAppend: append_item::<uiEditableCombobox>,
        uiEditableComboboxText: get_text::<uiEditableCombobox>,
        uiEditableComboboxSetText: set_text::<uiEditableCombobox>,
        uiEditableComboboxOnChanged: on_event::<uiEditableCombobox>,

        uiNewSpinbox: new_ranged::<uiSpinbox>,
        uiSpinboxValue: get_value::<uiSpinbox>,
        uiSpinboxSetValue: set_value::<uiSpinbox>,
        uiSpinboxOnChanged: on_event::<uiSpinbox>,

        uiNewSlider: new_ranged::<uiSlider>,
        uiSliderValue: get_value::<uiSlider>,
        uiSliderSetValue: set_value::<uiSlider>,
        uiSliderOnChanged: on_event::<uiSlider>,

        uiNewRadioButtons: new_selector::<uiRadioButtons>,
        uiRadioButtonsAppend: append_item::<uiRadioButtons>,
        uiRadioButtonsSelected: get_value::<uiRadioButtons>,
        uiRadioButtonsSetSelected: set_value::<uiRadioButtons>,
        uiRadioButtonsOnSelected: on_event::<uiRadioButtons>,

        uiNewDateTimePicker: new_plain::<uiDateTimePicker>,
        uiNewDatePicker: new_plain::<uiDateTimePicker>,
        uiNewTimePicker: new_plain::<uiDateTimePicker>,
        uiDateTimePickerTime: picker_time,
        uiDateTimePickerSetTime: picker_set_time,
        uiDateTimePickerOnChanged: on_event::<uiDateTimePicker>,

        uiNewLabel: new_with_text::<uiLabel>,
        uiLabelText: get_text::<uiLabel>,
        uiLabelSetText: set_text::<uiLabel>,

        uiNewHorizontalSeparator: new_plain::<uiSeparator>,
        uiNewVerticalSeparator: new_plain::<uiSeparator>,

        uiNewProgressBar: new_plain::<uiProgressBar>,
        uiProgressBarValue: get_value::<uiProgressBar>,
        uiProgressBarSetValue: set_value::<uiProgressBar>,

        uiNewButton: new_with_text::<uiButton>,
        uiButtonText: get_text::<uiButton>,
        uiButtonSetText: set_text::<uiButton>,
        uiButtonOnClicked: on_event::<uiButton>,

        uiNewColorButton: new_plain::<uiColorButton>,
        uiColorButtonColor: color,
        uiColorButtonSetColor: set_color,
        uiColorButtonOnChanged: on_event::<uiColorButton>,

        uiNewFontButton: new_plain::<uiFontButton>,
        uiFontButtonFont: font,
        uiFreeFontButtonFont: free_font,
        uiFontButtonOnChanged: on_event::<uiFontButton>,
    }
}

// Test-facing helpers

/// A toolkit backed by the fake table, with test logging wired up.
pub(crate) fn ui() -> Ui {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
    state(|s| *s = FakeState::default());
    Ui::with_api(api()).unwrap()
}

pub(crate) fn fail_next_alloc() {
    state(|s| s.fail_next_alloc = true)
}

pub(crate) fn fail_next_init(msg: &str) {
    state(|s| s.init_error = Some(CString::new(msg).unwrap()))
}

pub(crate) fn init_errors_freed() -> usize {
    state(|s| s.init_errors_freed)
}

pub(crate) fn set_null_text(null: bool) {
    state(|s| s.null_text = null)
}

/// Text buffers handed out by getters and not yet given back.
pub(crate) fn outstanding_text() -> isize {
    state(|s| s.outstanding_text)
}

pub(crate) fn destroyed() -> usize {
    state(|s| s.destroyed)
}

pub(crate) fn main_runs() -> usize {
    state(|s| s.main_runs)
}

/// Raw integer slot of a control (value, selection, or the menubar flag).
pub(crate) fn int_value(c: &impl Control) -> c_int {
    unsafe { control(c.as_raw()).value }
}

pub(crate) fn children(c: &impl Control) -> Vec<*mut uiControl> {
    unsafe { control(c.as_raw()).children.clone() }
}

/// Raw (halign, valign) a grid received for each child, in child order.
pub(crate) fn grid_aligns(c: &impl Control) -> Vec<(c_uint, c_uint)> {
    unsafe { control(c.as_raw()).aligns.clone() }
}

/// Raw `uiAt` of the most recent grid insertion.
pub(crate) fn grid_inserted_at(c: &impl Control) -> Option<c_uint> {
    unsafe { control(c.as_raw()).inserted_at }
}

pub(crate) fn items(c: &impl Control) -> Vec<String> {
    unsafe {
        control(c.as_raw())
            .items
            .iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }
}

/// Fire the control's registered change/click/toggle/select notification.
pub(crate) fn fire_event(c: &impl Control) -> bool {
    let Some((f, data)) = (unsafe { control(c.as_raw()).event }) else {
        return false;
    };
    unsafe {
        let f: unsafe extern "C" fn(*mut c_void, *mut c_void) = std::mem::transmute(f);
        f(c.as_raw().cast(), data);
    }
    true
}

/// Ask the window's closing handler, as libui does when the user clicks close.
///
/// Like libui, a nonzero answer destroys the window; the handle is dead after.
pub(crate) fn fire_closing(w: &Window) -> Option<c_int> {
    let (f, data) = unsafe { control(w.as_raw()).closing }?;
    let answer = unsafe {
        let f: ClosingFn = std::mem::transmute(f);
        f(w.as_raw().cast(), data)
    };
    if answer != 0 {
        unsafe { destroy(w.as_raw()) };
    }
    Some(answer)
}

/// Fire the closing handler with a null sender.
pub(crate) fn fire_closing_without_sender(w: &Window) -> Option<c_int> {
    let (f, data) = unsafe { control(w.as_raw()).closing }?;
    unsafe {
        let f: ClosingFn = std::mem::transmute(f);
        Some(f(ptr::null_mut(), data))
    }
}

pub(crate) fn fire_should_quit() -> Option<c_int> {
    let (f, data) = state(|s| s.should_quit)?;
    unsafe {
        let f: ShouldQuitFn = std::mem::transmute(f);
        Some(f(data))
    }
}
