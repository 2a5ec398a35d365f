//! Exact subimage matching and exhaustive positional search.

use crate::image::GrayMap;
use crate::instrument;
use crate::trace::{trace_event, trace_span};

/// Returns `true` if `small` equals the region of `big` anchored at `(x, y)`.
///
/// A placement where `small` does not fit is an ordinary mismatch. The scan
/// runs column by column and stops at the first differing sample.
///
/// # Panics
///
/// Panics if `(x, y)` is not a valid position in `big`.
pub fn match_subimage(big: &GrayMap, x: usize, y: usize, small: &GrayMap) -> bool {
    assert!(
        big.valid_pos(x, y),
        "anchor ({x}, {y}) outside {}x{} image",
        big.width(),
        big.height()
    );
    if !big.valid_rect(x, y, small.width(), small.height()) {
        return false;
    }
    for i in 0..small.width() {
        for j in 0..small.height() {
            // 1 comparison
            instrument::count_ops(1);
            if big.get(x + i, y + j) != small.get(i, j) {
                return false;
            }
        }
    }
    true
}

/// Finds the first placement of `small` inside `big`.
///
/// Anchors are tried with `x` in the outer loop and `y` in the inner loop, so
/// among several matches the one with the smallest `x` (then smallest `y`)
/// wins. Returns `None` when there is no match, including when `small` is
/// larger than `big` in either dimension or either image is empty.
pub fn locate_subimage(big: &GrayMap, small: &GrayMap) -> Option<(usize, usize)> {
    let _span = trace_span!(
        "locate_subimage",
        width = big.width(),
        height = big.height(),
        tpl_width = small.width(),
        tpl_height = small.height()
    )
    .entered();
    if small.width() == 0 || small.height() == 0 || big.width() == 0 || big.height() == 0 {
        return None;
    }
    let max_x = big.width().checked_sub(small.width())?;
    let max_y = big.height().checked_sub(small.height())?;
    let found = (0..=max_x)
        .flat_map(|x| (0..=max_y).map(move |y| (x, y)))
        .find(|&(x, y)| match_subimage(big, x, y, small));
    trace_event!("locate_subimage_done", found = found.is_some());
    found
}
