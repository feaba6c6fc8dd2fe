//! Decode -> draw -> encode
//!
//! Each step strictly follows the previous one. Decode and encode run on
//! tokio's blocking pool so the UI thread never stalls on pixel work.
//! Linking the result for download is left to the widget, which knows
//! whether the output is still wanted.

use super::platform::ImageCodec;
use crate::constants::WEBP_QUALITY;
use crate::error::ConvertError;
use crate::types::{EncodedWebp, SelectedFile};
use image::{imageops, DynamicImage, RgbaImage};
use std::sync::Arc;
use tracing::debug;

/// Off-screen RGBA buffer, transparent until drawn on
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    /// Copy `bitmap` onto the surface with its top-left corner at (x, y).
    /// Anything falling outside the surface is clipped.
    pub fn draw(&mut self, bitmap: &DynamicImage, x: i64, y: i64) {
        imageops::replace(&mut self.pixels, &bitmap.to_rgba8(), x, y);
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

pub async fn run(file: SelectedFile, codec: Arc<dyn ImageCodec>) -> Result<EncodedWebp, ConvertError> {
    let bytes = file.bytes.clone();
    let decoder = codec.clone();
    let bitmap = tokio::task::spawn_blocking(move || decoder.decode(&bytes)).await??;
    debug!(
        file = %file.name,
        width = bitmap.width(),
        height = bitmap.height(),
        "Decoded bitmap"
    );

    let encoded = tokio::task::spawn_blocking(move || {
        // Sized exactly to the bitmap: no scaling, no cropping
        let mut surface = Surface::new(bitmap.width(), bitmap.height());
        surface.draw(&bitmap, 0, 0);
        let (width, height) = surface.dimensions();
        codec
            .encode_webp(surface.pixels(), WEBP_QUALITY)
            .map(|bytes| EncodedWebp { bytes, width, height })
    })
    .await?;

    encoded
        .filter(|e| !e.bytes.is_empty())
        .ok_or(ConvertError::Encode)
}
