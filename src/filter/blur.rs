//! Mean (box) filter backed by a summed-area table.
//!
//! Each pixel becomes the rounded mean of the window
//! `[x - dx, x + dx] x [y - dy, y + dy]` clipped to the image. Pixels near the
//! border average over the smaller clipped window; nothing wraps or
//! replicates.

use crate::filter::integral::SummedAreaTable;
use crate::image::GrayMap;
use crate::instrument;
use crate::trace::{trace_event, trace_span};
use crate::util::math::rounded_mean;
use crate::util::GrayMapResult;

/// Blurs `img` in place with a `(2*dx + 1) x (2*dy + 1)` mean filter.
///
/// The table is built from the original samples before any pixel is
/// rewritten. If the table cannot be allocated the image is left untouched
/// and `Allocation` is returned.
pub fn blur(img: &mut GrayMap, dx: usize, dy: usize) -> GrayMapResult<()> {
    let _span = trace_span!(
        "blur",
        width = img.width(),
        height = img.height(),
        dx = dx,
        dy = dy
    )
    .entered();
    let table = SummedAreaTable::build(img)?;

    let width = img.width();
    let height = img.height();
    let pixels = img.data_mut();
    let mut k = 0usize;
    for y in 0..height {
        let y0 = y.saturating_sub(dy);
        let y1 = y.saturating_add(dy).min(height - 1);
        for x in 0..width {
            let x0 = x.saturating_sub(dx);
            let x1 = x.saturating_add(dx).min(width - 1);
            let sum = table.window_sum(x0, y0, x1, y1);
            let area = ((x1 - x0 + 1) * (y1 - y0 + 1)) as u64;
            pixels[k] = rounded_mean(sum, area) as u8;
            instrument::count_mem(5);
            instrument::count_ops(6);
            k += 1;
        }
    }

    trace_event!("blur_done", pixels = k);
    Ok(())
}
