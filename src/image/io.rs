//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Any raster the `image`
//! crate decodes is converted to a single luma8 plane.

use crate::image::{ImageView, OwnedImage};
use crate::util::{EdgeMapError, EdgeMapResult};
use std::path::Path;

/// Creates a borrowed view from a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> EdgeMapResult<ImageView<'_, u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageView::from_slice(img.as_raw(), width, height)
}

/// Creates an owned plane from a grayscale image buffer.
pub fn owned_from_gray_image(img: &image::GrayImage) -> EdgeMapResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedImage::new(img.as_raw().clone(), width, height)
}

/// Creates an owned grayscale plane from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> EdgeMapResult<OwnedImage> {
    let gray = img.to_luma8();
    owned_from_gray_image(&gray)
}

/// Loads an image from disk and converts it to an owned grayscale plane.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> EdgeMapResult<OwnedImage> {
    let img = image::open(path).map_err(|err| EdgeMapError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
