//! Logo image probing and resizing

use crate::fs::write_atomic;
use assetfix_core::{AssetfixError, Result};
use image::imageops::FilterType;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

/// Read the pixel dimensions of a PNG without decoding the image data
pub fn png_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| image_error(path, e))
}

/// Resize a PNG in place to exactly `width` x `height`
pub fn resize_png(path: &Path, width: u32, height: u32) -> Result<()> {
    let img = image::open(path).map_err(|e| image_error(path, e))?;
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);

    let mut buf = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| image_error(path, e))?;

    write_atomic(path, &buf)
}

fn image_error(path: &Path, err: image::ImageError) -> AssetfixError {
    AssetfixError::Image {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
