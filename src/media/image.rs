// SPDX-License-Identifier: MPL-2.0
//! Decoded images ready for display.

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Approximate memory footprint of the decoded pixels.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes encoded bytes (JPEG, PNG, GIF, WebP, BMP).
///
/// # Errors
///
/// Returns [`Error::Image`](crate::error::Error::Image) when the format is
/// unknown or the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 10, 10, 255]));
        let mut bytes = Vec::new();
        image_rs::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decode_reports_dimensions() {
        let data = decode(&png_bytes(3, 2)).expect("valid png");
        assert_eq!((data.width, data.height), (3, 2));
        assert_eq!(data.size_bytes(), 24);
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
