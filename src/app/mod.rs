//! App module - the host window that mounts the converter widget

use crate::config::Config;
use crate::constants::*;
use crate::converter::platform::Platform;
use crate::converter::ImageConverter;
use crate::registry::{self, Widget, WidgetEnv};
use crate::theme;
use eframe::egui;
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) widget: Box<dyn Widget>,
    // Declared after the widget so it outlives any task the widget spawned
    _runtime: tokio::runtime::Runtime,
}

// ============================================================================
// APP INITIALIZATION
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> std::io::Result<Self> {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for the action buttons
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new()?;
        let env = WidgetEnv {
            platform: Platform::native(&config, runtime.handle().clone()),
            template: config.template.clone(),
        };
        let widget = registry::create(CONVERTER_TAG, &env).unwrap_or_else(|| {
            warn!(tag = CONVERTER_TAG, "Tag not registered, constructing directly");
            Box::new(ImageConverter::new(env))
        });
        info!(tag = widget.tag(), "Widget mounted");

        Ok(Self {
            widget,
            _runtime: runtime,
        })
    }
}

// ============================================================================
// UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                self.widget.show(ui);
            });
    }
}
