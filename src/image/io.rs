//! Convenience helpers for decoding and encoding images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Only PNG and JPEG inputs
//! are accepted.

use crate::image::Raster;
use crate::util::{CldError, CldResult};
use std::path::Path;

/// Creates an owned raster from a grayscale image buffer.
pub fn raster_from_gray_image(img: &image::GrayImage) -> CldResult<Raster<u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    Raster::new(img.as_raw().clone(), width, height)
}

/// Decodes a PNG or JPEG byte buffer into a grayscale raster.
pub fn decode_gray_image(bytes: &[u8]) -> CldResult<Raster<u8>> {
    let format = image::guess_format(bytes).map_err(|err| CldError::Initialization {
        reason: format!("unrecognized image content: {err}"),
    })?;
    if !matches!(format, image::ImageFormat::Png | image::ImageFormat::Jpeg) {
        return Err(CldError::Initialization {
            reason: format!("only png or jpeg images are accepted, got {format:?}"),
        });
    }
    let img = image::load_from_memory_with_format(bytes, format).map_err(|err| {
        CldError::ImageIo {
            reason: err.to_string(),
        }
    })?;
    raster_from_gray_image(&img.to_luma8())
}

/// Loads an image from disk and converts it to a grayscale raster.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> CldResult<Raster<u8>> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(CldError::Initialization {
            reason: format!("{} is a directory, expected an image file", path.display()),
        });
    }
    let bytes = std::fs::read(path).map_err(|err| CldError::Initialization {
        reason: format!("cannot read {}: {err}", path.display()),
    })?;
    decode_gray_image(&bytes)
}

/// Writes a raster as a grayscale image; the format follows the extension.
pub fn save_gray_image<P: AsRef<Path>>(raster: &Raster<u8>, path: P) -> CldResult<()> {
    let img = image::GrayImage::from_raw(
        raster.width() as u32,
        raster.height() as u32,
        raster.data().to_vec(),
    )
    .ok_or(CldError::BufferTooSmall {
        needed: raster.width() * raster.height(),
        got: raster.data().len(),
    })?;
    img.save(path).map_err(|err| CldError::ImageIo {
        reason: err.to_string(),
    })
}
