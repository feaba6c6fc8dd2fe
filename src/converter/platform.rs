//! Capabilities the converter needs from its host, with native implementations

use super::object_url::ObjectUrlStore;
use crate::config::Config;
use crate::constants::WEBP_MAX_DIMENSION;
use crate::utils::unique_path;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Native file chooser
pub trait FileChooser: Send + Sync {
    /// Paths the user picked; empty when the dialog was dismissed.
    fn choose(&self) -> Vec<PathBuf>;
}

/// Bitmap decoder and WebP encoder
pub trait ImageCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, image::ImageError>;

    /// `None` when this surface cannot be encoded as WebP.
    /// `quality` is on a 0.0-1.0 scale.
    fn encode_webp(&self, surface: &RgbaImage, quality: f32) -> Option<Vec<u8>>;
}

/// Destination for a triggered download
pub trait DownloadSink: Send + Sync {
    /// Where the bytes were written, or `None` if the user backed out.
    fn save(&self, file_name: &str, bytes: &[u8]) -> std::io::Result<Option<PathBuf>>;
}

/// Everything a converter instance talks to outside itself
#[derive(Clone)]
pub struct Platform {
    pub chooser: Arc<dyn FileChooser>,
    pub codec: Arc<dyn ImageCodec>,
    pub downloads: Arc<dyn DownloadSink>,
    pub object_urls: ObjectUrlStore,
    pub runtime: tokio::runtime::Handle,
}

impl Platform {
    pub fn native(config: &Config, runtime: tokio::runtime::Handle) -> Self {
        Self {
            chooser: Arc::new(NativeFileChooser),
            codec: Arc::new(NativeCodec),
            downloads: Arc::new(FolderDownloadSink::new(
                config.download_dir_or_default(),
                config.ask_save_location,
            )),
            object_urls: ObjectUrlStore::new(),
            runtime,
        }
    }
}

// ============================================================================
// NATIVE IMPLEMENTATIONS
// ============================================================================

pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "tga", "qoi",
];

pub struct NativeFileChooser;

impl FileChooser for NativeFileChooser {
    fn choose(&self) -> Vec<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select an image")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
            .into_iter()
            .collect()
    }
}

pub struct NativeCodec;

impl ImageCodec for NativeCodec {
    /// Decodes with the EXIF orientation applied, so camera photos come out upright.
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
        let mut decoder = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_decoder()?;
        let orientation = decoder.orientation()?;
        let mut bitmap = DynamicImage::from_decoder(decoder)?;
        bitmap.apply_orientation(orientation);
        Ok(bitmap)
    }

    fn encode_webp(&self, surface: &RgbaImage, quality: f32) -> Option<Vec<u8>> {
        let (width, height) = surface.dimensions();
        if width == 0 || height == 0 || width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
            debug!(width, height, "Surface outside WebP limits");
            return None;
        }
        let encoder = webp::Encoder::from_rgba(surface.as_raw(), width, height);
        match encoder.encode_simple(false, (quality * 100.0).clamp(0.0, 100.0)) {
            Ok(memory) if !memory.is_empty() => Some(memory.to_vec()),
            Ok(_) => None,
            Err(e) => {
                warn!(error = ?e, width, height, "WebP encoder failed");
                None
            }
        }
    }
}

/// Writes downloads into a folder, or asks for a location first
pub struct FolderDownloadSink {
    dir: PathBuf,
    ask: bool,
}

impl FolderDownloadSink {
    pub fn new(dir: PathBuf, ask: bool) -> Self {
        Self { dir, ask }
    }
}

impl DownloadSink for FolderDownloadSink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> std::io::Result<Option<PathBuf>> {
        let dest = if self.ask {
            match rfd::FileDialog::new()
                .set_directory(&self.dir)
                .set_file_name(file_name)
                .add_filter("WebP image", &["webp"])
                .save_file()
            {
                Some(path) => path,
                None => return Ok(None),
            }
        } else {
            std::fs::create_dir_all(&self.dir)?;
            unique_path(&self.dir, file_name)
        };
        std::fs::write(&dest, bytes)?;
        Ok(Some(dest))
    }
}
