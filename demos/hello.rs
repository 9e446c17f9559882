//! Simple example: a window with a few controls wired together
//!
//! Run with: cargo run --example hello --features linked

use libui_widgets::{
    Button, Checkbox, Control, Entry, Label, LinearBox, ProgressBar, Slider, Ui, Window,
    WindowOptions,
};
use std::cell::Cell;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let ui = Ui::init()?;

    let window = Window::new(&ui, &WindowOptions::new("libui Widgets Example", 400, 300))?;
    window.set_margined(true);

    let column = LinearBox::vertical(&ui)?;
    column.set_padded(true);

    let greeting = Label::new(&ui, "Hello from libui_widgets!")?;
    let name = Entry::new(&ui)?;
    let greet = Button::new(&ui, "Greet")?;
    let progress = ProgressBar::new(&ui)?;
    let slider = Slider::new(&ui, 0, 100)?;
    let lock = Checkbox::new(&ui, "Lock slider")?;

    column.append(&greeting, false);
    column.append(&name, false);
    column.append(&greet, false);
    column.append(&slider, false);
    column.append(&progress, false);
    column.append(&lock, false);
    window.set_child(&column);

    let label = greeting.clone();
    let entry = name.clone();
    greet.on_clicked(move |_| {
        let who = entry.text();
        let who = if who.is_empty() { "world".to_string() } else { who };
        label.set_text(&format!("Hello, {}!", who));
    });

    let bar = progress.clone();
    slider.on_changed(move |s| bar.set_value(s.value()));

    let locked = slider.clone();
    lock.on_toggled(move |c| locked.set_enabled(!c.checked()));

    // Returning 1 lets libui destroy the window; the flag ends the loop below
    let open = Rc::new(Cell::new(true));
    let still_open = open.clone();
    window.on_closing(move |_| {
        println!("Window closing.");
        still_open.set(false);
        1
    });
    ui.on_should_quit(|| true);

    window.show();
    ui.main_steps();
    while open.get() && ui.main_step(true) {}

    println!("Done.");
    Ok(())
}
