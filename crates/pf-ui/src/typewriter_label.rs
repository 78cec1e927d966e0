//! Typewriter headline label

use std::time::Duration;

use egui::{Color32, Label, RichText, Sense, Ui};

/// Show the typed text with a blinking cursor. The label is clickable.
pub fn typewriter_label(ui: &mut Ui, text: &str, color: Color32) -> egui::Response {
    let time = ui.input(|i| i.time);
    let cursor = if (time * 2.0) as i64 % 2 == 0 { "|" } else { " " };
    ui.ctx().request_repaint_after(Duration::from_millis(500));

    let text = RichText::new(format!("{}{}", text, cursor))
        .size(22.0)
        .monospace()
        .color(color);
    ui.add(Label::new(text).sense(Sense::click()))
}
