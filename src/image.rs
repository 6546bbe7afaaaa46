//! Image side of the rescale: decode, fixed-size cubic resample, re-encode.

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use log::warn;
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use crate::io::ensure_directory;

/// Read and decode the image at `dir/name`.
pub fn load_image(dir: &Path, name: &str) -> io::Result<DynamicImage> {
    let path = dir.join(name);
    let bytes = fs::read(&path)?;
    image::load_from_memory(&bytes).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to decode image {}: {}", path.display(), e),
        )
    })
}

/// Resample to a square `target_size` grid with cubic interpolation.
pub fn resize_image(image: &DynamicImage, target_size: u32) -> DynamicImage {
    image.resize_exact(target_size, target_size, FilterType::CatmullRom)
}

/// Encode and write an image as `dir/name`, normalizing TIFF names to the
/// lossy `.jpg` output extension. An image the encoder rejects is skipped
/// with a warning; write failures propagate.
pub fn save_image(image: &DynamicImage, dir: &Path, name: &str) -> io::Result<()> {
    ensure_directory(dir)?;

    let name = normalize_extension(name);
    let path = dir.join(&name);
    let format = ImageFormat::from_path(&path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("No encoder for {}: {}", path.display(), e),
        )
    })?;

    let mut encoded = Vec::new();
    // The JPEG encoder rejects alpha channels
    let result = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut Cursor::new(&mut encoded), format)
    } else {
        image.write_to(&mut Cursor::new(&mut encoded), format)
    };

    if let Err(e) = result {
        warn!("Skipping {}: encoding failed: {}", path.display(), e);
        return Ok(());
    }

    fs::write(&path, encoded)
}

// Map high-bit-depth TIFF names onto the lossy output extension
fn normalize_extension(name: &str) -> String {
    for tiff in [".tiff", ".tif"] {
        if let Some(stem) = name.strip_suffix(tiff) {
            return format!("{}.jpg", stem);
        }
    }
    name.to_string()
}
