//! Decoded pixel data for a single media variant.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use thiserror::Error;

/// Errors that can occur while decoding an inline payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload was empty.
    #[error("inline payload is empty")]
    EmptyPayload,

    /// The payload could not be decoded as an image.
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Decoded pixel data for one variant of a media object.
///
/// Immutable once created; a populated cache slot is replaced wholesale,
/// never edited in place. `Clone` performs a deep copy of the pixel
/// buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pixels: RgbaImage,
}

impl DecodedImage {
    /// Wrap an already-decoded RGBA buffer.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Decode a compact inline payload (typically a tiny JPEG) into pixel
    /// data, guessing the format from the bytes.
    pub fn from_inline_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::EmptyPayload);
        }
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self {
            pixels: decoded.to_rgba8(),
        })
    }

    /// Pixel width.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Borrow the underlying RGBA buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Downscale so neither side exceeds `limit`, preserving aspect ratio
    /// with a smooth filter. Images already within the limit are returned
    /// unchanged.
    pub fn scaled_to_limit(self, limit: u32) -> Self {
        let (width, height) = self.pixels.dimensions();
        if width <= limit && height <= limit {
            return self;
        }
        let scaled = DynamicImage::ImageRgba8(self.pixels)
            .resize(limit, limit, FilterType::Lanczos3)
            .into_rgba8();
        Self { pixels: scaled }
    }
}
