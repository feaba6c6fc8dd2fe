//! Image converter widget
//!
//! Pick a file, convert it to WebP off the UI thread, then offer the
//! result for download. State moves `Idle -> FileSelected -> Converting
//! -> Converted`; picking another file always drops back to
//! `FileSelected` with the download action disabled.

pub mod dialog;
pub mod object_url;
pub mod pipeline;
pub mod platform;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;

use crate::constants::*;
use crate::error::ConvertError;
use crate::registry::{self, RegistryError, Widget, WidgetEnv};
use crate::theme;
use crate::types::*;
use crate::ui::components;
use crate::utils::{format_bytes, webp_file_name};
use dialog::Dialog;
use eframe::egui;
use object_url::ObjectUrl;
use platform::Platform;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use template::Slots;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, error, info, warn};

/// Define `image-converter` in the process-wide registry.
/// A second call returns `AlreadyDefined` and changes nothing.
pub fn register() -> Result<(), RegistryError> {
    registry::define(CONVERTER_TAG, create_converter)
}

fn create_converter(env: &WidgetEnv) -> Box<dyn Widget> {
    Box::new(ImageConverter::new(env.clone()))
}

/// A finished conversion, linked for download
pub struct ConvertedImage {
    pub url: ObjectUrl,
    pub source_name: String,
    pub width: u32,
    pub height: u32,
    pub size: usize,
}

struct PendingConversion {
    generation: u64,
    source_name: String,
    rx: oneshot::Receiver<Result<EncodedWebp, ConvertError>>,
}

pub struct ImageConverter {
    id: egui::Id,
    platform: Platform,
    slots: Slots,
    dialog: Option<Dialog>,
    file: Option<SelectedFile>,
    state: ConversionState,
    output: Option<ConvertedImage>,
    pending: Option<PendingConversion>,
    // Bumped on every selection so results for an older file are ignored
    generation: u64,
    last_saved: Option<PathBuf>,
}

impl ImageConverter {
    pub fn new(env: WidgetEnv) -> Self {
        static INSTANCES: AtomicU64 = AtomicU64::new(0);
        let instance = INSTANCES.fetch_add(1, Ordering::Relaxed);
        let (slots, dialog) = Slots::bind(&env.template);
        Self {
            id: egui::Id::new((CONVERTER_TAG, instance)),
            platform: env.platform,
            slots,
            dialog,
            file: None,
            state: ConversionState::Idle,
            output: None,
            pending: None,
            generation: 0,
            last_saved: None,
        }
    }

    pub fn state(&self) -> ConversionState {
        self.state
    }

    #[cfg(test)]
    pub fn displayed_file_name(&self) -> &str {
        &self.slots.file_name.value
    }

    #[cfg(test)]
    pub fn convert_enabled(&self) -> bool {
        self.slots.convert.enabled
    }

    #[cfg(test)]
    pub fn download_enabled(&self) -> bool {
        self.slots.download.enabled
    }

    pub fn output(&self) -> Option<&ConvertedImage> {
        self.output.as_ref()
    }

    /// Message of the dialog if it is currently showing
    #[cfg(test)]
    pub fn notification(&self) -> Option<&str> {
        self.dialog
            .as_ref()
            .filter(|d| d.is_open())
            .map(|d| d.message())
    }

    pub fn last_saved(&self) -> Option<&PathBuf> {
        self.last_saved.as_ref()
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    /// Open the native chooser and take the first file picked.
    pub fn select_file(&mut self) {
        let paths = self.platform.chooser.choose();
        self.on_files_chosen(&paths);
    }

    pub fn on_files_chosen(&mut self, paths: &[PathBuf]) {
        let Some(path) = paths.first() else {
            debug!("File chooser dismissed");
            return;
        };
        if paths.len() > 1 {
            debug!(ignored = paths.len() - 1, "Only the first chosen file is used");
        }
        match SelectedFile::from_path(path) {
            Ok(file) => self.set_file(file),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to read selected file");
                self.show_dialog(MSG_READ_FAILED);
            }
        }
    }

    pub fn set_file(&mut self, file: SelectedFile) {
        info!(
            file = %file.name,
            size = %format_bytes(file.bytes.len() as u64),
            mime = file.mime.unwrap_or("unknown"),
            "File selected"
        );
        self.slots.file_name.value = file.name.clone();
        self.file = Some(file);
        self.generation += 1;
        self.release_output();
        self.last_saved = None;
        self.state = ConversionState::FileSelected;
    }

    pub fn convert(&mut self, ctx: &egui::Context) {
        if self.pending.is_some() {
            debug!("Conversion already running, ignoring convert");
            return;
        }
        let Some(file) = self.file.clone() else {
            self.show_dialog(ConvertError::NoFileSelected.user_message());
            return;
        };

        info!(file = %file.name, "Starting conversion");
        let (tx, rx) = oneshot::channel();
        let codec = self.platform.codec.clone();
        let ctx = ctx.clone();
        let source_name = file.name.clone();
        self.platform.runtime.spawn(async move {
            let result = pipeline::run(file, codec).await;
            // Receiver is gone if the widget was dropped meanwhile
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        self.pending = Some(PendingConversion {
            generation: self.generation,
            source_name,
            rx,
        });
        self.state = ConversionState::Converting;
        self.slots.convert.enabled = false;
        self.slots.download.enabled = false;
    }

    /// Pick up a finished conversion, if any. Called every frame.
    pub fn poll_conversion(&mut self) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };
        let result = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => {
                self.pending = Some(pending);
                return;
            }
            Err(TryRecvError::Closed) => {
                error!(file = %pending.source_name, "Conversion task ended without a result");
                Err(ConvertError::Encode)
            }
        };
        self.slots.convert.enabled = true;

        if pending.generation != self.generation {
            debug!(file = %pending.source_name, "Discarding result for a replaced file");
            return;
        }

        match result {
            Ok(encoded) => self.link_output(encoded, pending.source_name),
            Err(e) => {
                warn!(error = %e, file = %pending.source_name, "Conversion failed");
                self.release_output();
                self.state = ConversionState::FileSelected;
                self.show_dialog(e.user_message());
            }
        }
    }

    fn link_output(&mut self, encoded: EncodedWebp, source_name: String) {
        let size = encoded.bytes.len();
        let url = self.platform.object_urls.create(encoded.bytes.into());
        self.release_output();
        info!(
            file = %source_name,
            width = encoded.width,
            height = encoded.height,
            size = %format_bytes(size as u64),
            url = %url,
            live_urls = self.platform.object_urls.live_count(),
            "Conversion complete"
        );
        self.output = Some(ConvertedImage {
            url,
            source_name,
            width: encoded.width,
            height: encoded.height,
            size,
        });
        self.slots.download.enabled = true;
        self.state = ConversionState::Converted;
    }

    pub fn download(&mut self) {
        if !self.slots.download.enabled {
            return;
        }
        let Some(output) = self.output.as_ref() else {
            return;
        };
        let Some(bytes) = self.platform.object_urls.resolve(&output.url) else {
            warn!(url = %output.url, "Download reference no longer resolves");
            return;
        };
        let file_name = webp_file_name(&output.source_name);
        match self.platform.downloads.save(&file_name, &bytes) {
            Ok(Some(path)) => {
                info!(path = %path.display(), "Saved converted image");
                self.last_saved = Some(path);
            }
            Ok(None) => debug!("Save cancelled"),
            Err(e) => {
                let e = ConvertError::from(e);
                warn!(error = %e, file = %file_name, "Failed to save converted image");
                self.show_dialog(e.user_message());
            }
        }
    }

    pub fn close_dialog(&mut self) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.hide();
        }
    }

    fn show_dialog(&mut self, message: &str) {
        match self.dialog.as_mut() {
            Some(dialog) => dialog.show(message),
            None => debug!(text = message, "No dialog slot, notification dropped"),
        }
    }

    /// Disable download and revoke the current reference.
    fn release_output(&mut self) {
        if let Some(output) = self.output.take() {
            self.platform.object_urls.revoke(&output.url);
        }
        self.slots.download.enabled = false;
    }
}

impl Drop for ImageConverter {
    fn drop(&mut self) {
        self.release_output();
    }
}

impl Widget for ImageConverter {
    fn tag(&self) -> &'static str {
        CONVERTER_TAG
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        self.poll_conversion();

        let mut select = false;
        let mut convert = false;
        let mut download = false;

        theme::card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new(&self.slots.title)
                    .size(theme::FONT_TITLE)
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(theme::SPACING_LG);

            ui.horizontal(|ui| {
                select = components::action_button(ui, &self.slots.select, false);
                components::file_name_field(ui, &self.slots.file_name);
            });
            ui.add_space(theme::SPACING_MD);

            ui.horizontal(|ui| {
                convert = components::action_button(ui, &self.slots.convert, true);
                download = components::action_button(ui, &self.slots.download, false);
                if self.state() == ConversionState::Converting {
                    ui.spinner();
                }
            });

            if let Some(output) = self.output() {
                ui.add_space(theme::SPACING_SM);
                components::caption(
                    ui,
                    &format!(
                        "{} × {} · {}",
                        output.width,
                        output.height,
                        format_bytes(output.size as u64)
                    ),
                );
            }
            if let Some(path) = self.last_saved() {
                components::caption(ui, &format!("Saved to {}", path.display()));
            }
        });

        let ctx = ui.ctx().clone();
        if select {
            self.select_file();
        }
        if convert {
            self.convert(&ctx);
        }
        if download {
            self.download();
        }
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.render(&ctx, self.id);
        }
    }
}
