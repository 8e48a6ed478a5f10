// src/services/image_processor.rs
use crate::models::{ImageFeatures, UploadedFile};
use log::debug;
use std::io::Cursor;

/// Aspect ratio assumed when the image header cannot be read.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

pub struct ImageProcessor;

impl ImageProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Derives the classifier's inputs from an upload. Never fails: an
    /// unreadable image is treated as square.
    pub fn extract_features(&self, file: &UploadedFile) -> ImageFeatures {
        ImageFeatures {
            file_name: file.name.to_lowercase(),
            file_size: file.size,
            aspect_ratio: self.aspect_ratio(&file.data),
        }
    }

    pub fn aspect_ratio(&self, data: &[u8]) -> f64 {
        match self.dimensions(data) {
            Ok((width, height)) if height > 0 => width as f64 / height as f64,
            Ok((width, height)) => {
                debug!("Degenerate image dimensions {}x{}, assuming square", width, height);
                DEFAULT_ASPECT_RATIO
            }
            Err(e) => {
                debug!("Could not read image dimensions ({}), assuming square", e);
                DEFAULT_ASPECT_RATIO
            }
        }
    }

    /// Reads width and height from the header without decoding pixels.
    fn dimensions(&self, data: &[u8]) -> Result<(u32, u32), String> {
        image::io::Reader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| format!("Failed to guess image format: {}", e))?
            .into_dimensions()
            .map_err(|e| format!("Invalid image format: {}", e))
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// PNG bytes of a blank image, for tests elsewhere in the crate.
#[cfg(test)]
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    use image::{DynamicImage, ImageFormat};

    let img = DynamicImage::new_rgb8(width, height);
    let mut output = Vec::new();
    img.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .expect("encode png");
    output
}
