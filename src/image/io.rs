//! Bridge to the `image` crate for formats other than PGM.
//!
//! Available when the `image-io` feature is enabled. The `image` crate has no
//! notion of a white level, so samples are stretched to a white level of 255
//! on the way out and decoded images always carry maxval 255.

use crate::image::GrayMap;
use crate::util::math::round_clamp;
use crate::util::{GrayMapError, GrayMapResult};
use std::path::Path;

/// Copies an `image::GrayImage` into a new `GrayMap` with maxval 255.
pub fn from_gray_image(img: &image::GrayImage) -> GrayMapResult<GrayMap> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayMap::from_vec(img.as_raw().clone(), width, height, u8::MAX)
}

/// Converts a `GrayMap` into an `image::GrayImage`.
///
/// Samples are rescaled from `[0, maxval]` to `[0, 255]`, rounding half-up;
/// samples above maxval saturate to 255.
pub fn to_gray_image(img: &GrayMap) -> GrayMapResult<image::GrayImage> {
    let invalid = GrayMapError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    };
    let width = u32::try_from(img.width()).map_err(|_| invalid.clone())?;
    let height = u32::try_from(img.height()).map_err(|_| invalid.clone())?;
    let scale = 255.0 / f64::from(img.maxval());
    let data = img
        .data()
        .iter()
        .map(|&p| round_clamp(f64::from(p) * scale, u8::MAX))
        .collect();
    image::GrayImage::from_raw(width, height, data).ok_or(invalid)
}

/// Loads any supported image file and converts it to grayscale.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> GrayMapResult<GrayMap> {
    let img = image::open(path).map_err(|err| GrayMapError::ImageIo {
        reason: err.to_string(),
    })?;
    from_gray_image(&img.to_luma8())
}

/// Saves `img` in the format implied by the file extension.
pub fn save_gray_image<P: AsRef<Path>>(img: &GrayMap, path: P) -> GrayMapResult<()> {
    to_gray_image(img)?
        .save(path)
        .map_err(|err| GrayMapError::ImageIo {
            reason: err.to_string(),
        })
}
