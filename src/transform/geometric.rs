//! Rotation, mirroring, and cropping.
//!
//! Every function reads `src` through [`GrayMap::get`] and writes a freshly
//! allocated image through [`GrayMap::set`]; the source is never modified.

use crate::image::GrayMap;
use crate::trace::trace_span;
use crate::util::GrayMapResult;

/// Rotates `src` by 90 degrees clockwise.
///
/// The result is `src.height()` wide and `src.width()` tall, with
/// `out(x, y) = src(y, src.height() - 1 - x)`.
pub fn rotate(src: &GrayMap) -> GrayMapResult<GrayMap> {
    let _span = trace_span!("rotate", width = src.width(), height = src.height()).entered();
    let out_width = src.height();
    let out_height = src.width();
    let mut out = GrayMap::new(out_width, out_height, src.maxval())?;
    for x in 0..out_width {
        for y in 0..out_height {
            out.set(x, y, src.get(y, out_width - 1 - x));
        }
    }
    Ok(out)
}

/// Flips `src` left to right: `out(x, y) = src(width - 1 - x, y)`.
pub fn mirror(src: &GrayMap) -> GrayMapResult<GrayMap> {
    let _span = trace_span!("mirror", width = src.width(), height = src.height()).entered();
    let width = src.width();
    let height = src.height();
    let mut out = GrayMap::new(width, height, src.maxval())?;
    for x in 0..width {
        for y in 0..height {
            out.set(x, y, src.get(width - 1 - x, y));
        }
    }
    Ok(out)
}

/// Copies the `w x h` rectangle anchored at `(x, y)` into a new image.
///
/// # Panics
///
/// Panics unless the rectangle lies inside `src`.
pub fn crop(src: &GrayMap, x: usize, y: usize, w: usize, h: usize) -> GrayMapResult<GrayMap> {
    assert!(
        src.valid_rect(x, y, w, h),
        "crop rectangle ({x}, {y}, {w}, {h}) outside {}x{} image",
        src.width(),
        src.height()
    );
    let _span = trace_span!("crop", x = x, y = y, width = w, height = h).entered();
    let mut out = GrayMap::new(w, h, src.maxval())?;
    for i in 0..w {
        for j in 0..h {
            out.set(i, j, src.get(x + i, y + j));
        }
    }
    Ok(out)
}
