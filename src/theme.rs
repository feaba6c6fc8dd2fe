//! Theme constants for the converter window
//! Colors, sizes and frames used by the widget and its dialog

use egui::{Color32, Stroke};

// =============================================================================
// COLORS
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_CARD: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18);
pub const BG_MODAL: Color32 = Color32::from_rgb(0x12, 0x12, 0x14);

pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const ACCENT_PRESSED: Color32 = Color32::from_rgb(0x14, 0xb8, 0xa6); // teal-500
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(0x04, 0x2f, 0x2e);

pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

pub const BTN_FILL: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_FILL_HOVER: Color32 = Color32::from_rgb(0x52, 0x52, 0x5b); // zinc-600
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a);

// =============================================================================
// SIZES
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.0;

pub const BUTTON_HEIGHT: f32 = 30.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

/// Dark visuals tuned for a single card of buttons and a read-only field
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_MODAL;
    visuals.extreme_bg_color = BG_INPUT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(STROKE_DEFAULT, ACCENT);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    let border = Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);
    let widgets = &mut visuals.widgets;
    for state in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
    ] {
        state.corner_radius = RADIUS_DEFAULT.into();
        state.expansion = 0.0;
    }
    widgets.noninteractive.bg_stroke = border;
    widgets.noninteractive.fg_stroke = Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);
    widgets.inactive.bg_stroke = border;
    widgets.inactive.fg_stroke = Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY);
    // Buttons carry their own fill, so hover and press only touch the outline and text
    widgets.hovered.bg_stroke = Stroke::new(STROKE_DEFAULT, BTN_FILL_HOVER);
    widgets.hovered.fg_stroke = Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);
    widgets.active.bg_stroke = Stroke::new(STROKE_DEFAULT, ACCENT_PRESSED);
    widgets.active.fg_stroke = Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
    });
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD.gamma_multiply(0.6))
        .stroke(Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

pub fn modal_frame() -> egui::Frame {
    card_frame().fill(BG_MODAL)
}

fn sized(button: egui::Button<'static>, fill: Color32) -> egui::Button<'static> {
    button
        .fill(fill)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    sized(egui::Button::new(text.into()), BTN_FILL)
}

/// Primary action
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    sized(
        egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_TEXT)),
        ACCENT,
    )
}

pub fn button_disabled(text: impl Into<String>) -> egui::Button<'static> {
    sized(
        egui::Button::new(egui::RichText::new(text.into()).color(TEXT_DIM)),
        BTN_DISABLED,
    )
}
