//! Modal notification dialog

use crate::theme;
use eframe::egui;

pub struct Dialog {
    title: String,
    close_label: String,
    message: String,
    open: bool,
}

impl Dialog {
    pub fn new(title: String, close_label: String) -> Self {
        Self {
            title,
            close_label,
            message: String::new(),
            open: false,
        }
    }

    pub fn show(&mut self, message: &str) {
        self.message = message.to_owned();
        self.open = true;
    }

    /// Safe to call when already hidden.
    pub fn hide(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn render(&mut self, ctx: &egui::Context, id: egui::Id) {
        if !self.is_open() {
            return;
        }

        let mut close = false;
        let modal_response = egui::Modal::new(id.with("dialog"))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(320.0);
                ui.label(
                    egui::RichText::new(&self.title)
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_PRIMARY),
                );
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new(&self.message)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(theme::SPACING_LG);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button(&self.close_label)).clicked() {
                        close = true;
                    }
                });
            });

        if close || modal_response.should_close() {
            self.hide();
        }
    }
}
