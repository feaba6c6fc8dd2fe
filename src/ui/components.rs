//! Reusable UI components

use crate::converter::template::{ActionSlot, FileNameSlot};
use crate::theme;
use eframe::egui;

/// Render an action slot as a button. Returns true if clicked while enabled.
pub fn action_button(ui: &mut egui::Ui, slot: &ActionSlot, accent: bool) -> bool {
    let text = format!("{}  {}", slot.icon, slot.label);
    let button = match (slot.enabled, accent) {
        (false, _) => theme::button_disabled(text),
        (true, true) => theme::button_accent(text),
        (true, false) => theme::button(text),
    };
    ui.add_enabled(slot.enabled, button).clicked()
}

/// Read-only single line showing the chosen file name
pub fn file_name_field(ui: &mut egui::Ui, slot: &FileNameSlot) {
    let mut value: &str = &slot.value;
    egui::Frame::new()
        .fill(theme::BG_INPUT)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 5))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(&slot.placeholder)
                    .frame(false)
                    .desired_width(ui.available_width()),
            );
        });
}

pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}
