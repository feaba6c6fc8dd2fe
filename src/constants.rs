//! Application constants and configuration

pub const APP_NAME: &str = "WebP Converter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tag the converter widget is registered under
pub const CONVERTER_TAG: &str = "image-converter";

/// Encoder quality on a 0.0-1.0 scale
pub const WEBP_QUALITY: f32 = 0.9;

/// libwebp refuses anything wider or taller than this
pub const WEBP_MAX_DIMENSION: u32 = 16383;

pub const MSG_NO_FILE: &str = "Please select an image file first.";
pub const MSG_DECODE_FAILED: &str = "This file could not be decoded as an image.";
pub const MSG_ENCODE_FAILED: &str = "Conversion failed, please try again or use a different file.";
pub const MSG_READ_FAILED: &str = "The selected file could not be read.";
pub const MSG_DOWNLOAD_FAILED: &str = "The converted file could not be saved.";
