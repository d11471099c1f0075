//! Page canvas backed by an RGB bitmap

use crate::{RenderError, Result};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::ImageEncode(err.to_string())
    }
}

/// An in-memory page bitmap.
///
/// Every canvas is normalized to 8-bit RGB with no alpha channel so that
/// preview output and PDF export are pixel-for-pixel consistent. A canvas is
/// owned by exactly one generation call and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Decode template bytes (PNG or JPEG) into a fresh canvas.
    ///
    /// The source bytes are left untouched; alpha channels are dropped
    /// during normalization.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(data)
            .map_err(|e| RenderError::TemplateDecode(e.to_string()))?;

        Ok(Self {
            pixels: decoded.to_rgb8(),
        })
    }

    /// Wrap an existing RGB bitmap.
    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Blend a colored pixel over the canvas with the given coverage.
    ///
    /// Coverage is clamped to 1.0; zero-coverage writes and out-of-bounds
    /// coordinates are ignored, so glyphs clip silently at the canvas edges.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }

        let alpha = coverage.min(1.0);
        let pixel = self.pixels.get_pixel_mut(x as u32, y as u32);
        for channel in 0..3 {
            let base = pixel[channel] as f32;
            let ink = color[channel] as f32;
            pixel[channel] = (ink * alpha + base * (1.0 - alpha)).round() as u8;
        }
    }

    /// Raw RGB bytes in row-major order (3 bytes per pixel)
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Encode the canvas as JPEG bytes
    pub fn to_jpeg(&self) -> Result<Vec<u8>> {
        self.encode(ImageFormat::Jpeg)
    }

    /// Encode the canvas as PNG bytes
    pub fn to_png(&self) -> Result<Vec<u8>> {
        self.encode(ImageFormat::Png)
    }

    fn encode(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(self.pixels.clone())
            .write_to(&mut Cursor::new(&mut bytes), format)?;
        Ok(bytes)
    }
}
