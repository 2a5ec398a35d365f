//! Point transforms: each output sample depends only on the input sample.
//!
//! All transforms run in place through a [`LookupMap`] and never fail.

pub mod lut;

pub use lut::LookupMap;

use crate::image::GrayMap;

/// Replaces every sample `p` by `maxval - p` (floored at 0).
pub fn negative(img: &mut GrayMap) {
    LookupMap::identity().negative(img.maxval()).apply(img);
}

/// Maps samples below `thr` to black and the rest to white (`maxval`).
pub fn threshold(img: &mut GrayMap, thr: u8) {
    let maxval = img.maxval();
    LookupMap::identity().threshold(thr, maxval).apply(img);
}

/// Multiplies every sample by `factor`, saturating at `maxval`.
///
/// Factors above 1 brighten the image, factors below 1 darken it.
pub fn brighten(img: &mut GrayMap, factor: f64) {
    let maxval = img.maxval();
    LookupMap::identity().affine(factor, 0.0, maxval).apply(img);
}
