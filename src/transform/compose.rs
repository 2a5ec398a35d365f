//! Two-image operations that write into a larger destination in place.

use crate::image::GrayMap;
use crate::instrument;
use crate::trace::trace_span;
use crate::util::math::round_clamp;

fn assert_fits(dst: &GrayMap, x: usize, y: usize, src: &GrayMap) {
    assert!(
        dst.valid_rect(x, y, src.width(), src.height()),
        "{}x{} image does not fit at ({x}, {y}) in {}x{} image",
        src.width(),
        src.height(),
        dst.width(),
        dst.height()
    );
}

/// Copies `src` into `dst` with its top-left corner at `(x, y)`.
///
/// # Panics
///
/// Panics unless `src` fits inside `dst` at that position.
pub fn paste(dst: &mut GrayMap, x: usize, y: usize, src: &GrayMap) {
    assert_fits(dst, x, y, src);
    let _span = trace_span!("paste", x = x, y = y, width = src.width(), height = src.height())
        .entered();
    for i in 0..src.width() {
        for j in 0..src.height() {
            dst.set(x + i, y + j, src.get(i, j));
        }
    }
}

/// Blends `src` into `dst` at `(x, y)` with weight `alpha`.
///
/// `src` levels are rescaled to the white level of `dst`, then
/// `dst = (1 - alpha) * dst + alpha * src`, rounded and saturated to
/// `[0, dst.maxval()]`. Alpha outside `[0, 1]` extrapolates.
///
/// # Panics
///
/// Panics unless `src` fits inside `dst` at that position.
pub fn blend(dst: &mut GrayMap, x: usize, y: usize, src: &GrayMap, alpha: f64) {
    assert_fits(dst, x, y, src);
    let _span = trace_span!("blend", x = x, y = y, width = src.width(), height = src.height())
        .entered();
    let maxval = dst.maxval();
    let scale = f64::from(maxval) / f64::from(src.maxval());
    let a = alpha * scale;
    let b = 1.0 - alpha;
    for i in 0..src.width() {
        for j in 0..src.height() {
            let p1 = dst.get(x + i, y + j);
            let p2 = src.get(i, j);
            // 2 mults + 1 add
            instrument::count_ops(3);
            let p0 = round_clamp(b * f64::from(p1) + a * f64::from(p2), maxval);
            dst.set(x + i, y + j, p0);
        }
    }
}
