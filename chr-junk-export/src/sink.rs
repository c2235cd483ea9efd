//! Destination for rendered RGB images.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::ExportError;

/// Receives each finished image together with the path it belongs at.
pub trait ImageSink {
    fn write_rgb(&mut self, path: &Path, image: &RgbImage) -> Result<(), ExportError>;
}

/// Writes every image as a PNG file.
#[derive(Debug, Default)]
pub struct PngSink;

impl PngSink {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSink for PngSink {
    fn write_rgb(&mut self, path: &Path, image: &RgbImage) -> Result<(), ExportError> {
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| ExportError::image(path, e))
    }
}
