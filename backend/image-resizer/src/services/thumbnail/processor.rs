//! Thumbnail processor - generates thumbnails from original images
//!
//! Takes an image, shrinks it to fit within the configured bounding box while
//! maintaining aspect ratio, and encodes it as PNG. Images already inside the
//! box keep their size.

use crate::error::{ResizerError, Result};
use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageOutputFormat};
use std::io::Cursor;
use tracing::debug;

/// Configuration for thumbnail generation
#[derive(Clone, Debug)]
pub struct ThumbnailConfig {
    /// Maximum dimension (width or height) in pixels
    pub max_dimension: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self { max_dimension: 200 }
    }
}

/// Result of thumbnail generation
#[derive(Debug)]
pub struct ThumbnailResult {
    /// The thumbnail image data as PNG
    pub data: Bytes,
    /// Width of the thumbnail
    pub width: u32,
    /// Height of the thumbnail
    pub height: u32,
}

/// Thumbnail processor
pub struct ThumbnailProcessor {
    config: ThumbnailConfig,
}

impl ThumbnailProcessor {
    /// Create a new processor with the given configuration
    pub fn new(config: ThumbnailConfig) -> Self {
        Self { config }
    }

    /// Create a processor with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ThumbnailConfig::default())
    }

    /// Generate a thumbnail from the given image data
    ///
    /// Runs inline on the calling task; an invocation handles a single image.
    pub fn generate(&self, original_data: &[u8]) -> Result<ThumbnailResult> {
        let img = image::load_from_memory(original_data)
            .map_err(|e| ResizerError::Image(format!("Failed to decode image: {e}")))?;

        let (orig_w, orig_h) = img.dimensions();
        debug!(
            original_width = orig_w,
            original_height = orig_h,
            "Processing image for thumbnail"
        );

        let (new_w, new_h) = self.calculate_dimensions(orig_w, orig_h);

        if (new_w, new_h) == (orig_w, orig_h) {
            debug!("Image already within max dimensions, encoding as-is");
            let data = self.encode_png(&img)?;
            return Ok(ThumbnailResult {
                data,
                width: orig_w,
                height: orig_h,
            });
        }

        let resized = img.resize_exact(new_w, new_h, FilterType::Triangle);
        let data = self.encode_png(&resized)?;

        debug!(
            width = new_w,
            height = new_h,
            size = data.len(),
            "Thumbnail generated"
        );

        Ok(ThumbnailResult {
            data,
            width: new_w,
            height: new_h,
        })
    }

    /// Fit `width`×`height` inside the bounding box, preserving aspect ratio.
    ///
    /// Scale is `min(max/width, max/height)` capped at 1, and neither side
    /// drops below one pixel.
    pub fn calculate_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let max_dim = self.config.max_dimension;

        if width <= max_dim && height <= max_dim {
            return (width, height);
        }

        if width > height {
            let ratio = max_dim as f32 / width as f32;
            (max_dim, (((height as f32) * ratio).round() as u32).max(1))
        } else {
            let ratio = max_dim as f32 / height as f32;
            ((((width as f32) * ratio).round() as u32).max(1), max_dim)
        }
    }

    /// Encode image as PNG
    fn encode_png(&self, img: &DynamicImage) -> Result<Bytes> {
        let mut buf = Vec::new();
        let mut cursor = Cursor::new(&mut buf);

        img.write_to(&mut cursor, ImageOutputFormat::Png)
            .map_err(|e| ResizerError::Image(format!("Failed to encode PNG: {e}")))?;

        Ok(Bytes::from(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn encoded(width: u32, height: u32, format: ImageOutputFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    #[test]
    fn test_calculate_dimensions_landscape() {
        let processor = ThumbnailProcessor::with_defaults();
        assert_eq!(processor.calculate_dimensions(800, 400), (200, 100));
    }

    #[test]
    fn test_calculate_dimensions_portrait() {
        let processor = ThumbnailProcessor::with_defaults();
        assert_eq!(processor.calculate_dimensions(300, 1200), (50, 200));
    }

    #[test]
    fn test_calculate_dimensions_square() {
        let processor = ThumbnailProcessor::with_defaults();
        assert_eq!(processor.calculate_dimensions(1000, 1000), (200, 200));
    }

    #[test]
    fn test_calculate_dimensions_never_upscales() {
        let processor = ThumbnailProcessor::with_defaults();
        assert_eq!(processor.calculate_dimensions(120, 80), (120, 80));
        assert_eq!(processor.calculate_dimensions(200, 200), (200, 200));
    }

    #[test]
    fn test_calculate_dimensions_extreme_ratio() {
        let processor = ThumbnailProcessor::with_defaults();
        assert_eq!(processor.calculate_dimensions(4000, 10), (200, 1));
    }

    #[test]
    fn test_generate_resizes_to_png() {
        let processor = ThumbnailProcessor::with_defaults();
        let original = encoded(800, 400, ImageOutputFormat::Jpeg(90));

        let result = processor.generate(&original).unwrap();

        assert_eq!((result.width, result.height), (200, 100));
        assert_eq!(image::guess_format(&result.data).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&result.data).unwrap();
        assert_eq!(decoded.dimensions(), (200, 100));
    }

    #[test]
    fn test_generate_keeps_small_images() {
        let processor = ThumbnailProcessor::with_defaults();
        let original = encoded(64, 48, ImageOutputFormat::Png);

        let result = processor.generate(&original).unwrap();

        assert_eq!((result.width, result.height), (64, 48));
        let decoded = image::load_from_memory(&result.data).unwrap();
        assert_eq!(decoded.dimensions(), (64, 48));
    }

    #[test]
    fn test_generate_rejects_non_image() {
        let processor = ThumbnailProcessor::with_defaults();
        let err = processor.generate(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ResizerError::Image(_)));
    }
}
