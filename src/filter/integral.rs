//! Summed-area table (2D prefix sum) over a grayscale image.

use crate::image::{try_zeroed, GrayMap};
use crate::instrument;
use crate::util::GrayMapResult;

/// Table of inclusive prefix sums: `at(x, y)` is the sum of every sample in
/// `[0, x] x [0, y]`.
pub struct SummedAreaTable {
    sums: Vec<u64>,
    width: usize,
    height: usize,
}

impl SummedAreaTable {
    /// Builds the table in one raster pass over `img`.
    ///
    /// Fails with `Allocation` if the table storage cannot be reserved.
    pub fn build(img: &GrayMap) -> GrayMapResult<Self> {
        let width = img.width();
        let height = img.height();
        let mut sums: Vec<u64> = try_zeroed(img.data().len())?;
        let pixels = img.data();

        let mut k = 0usize;
        for y in 0..height {
            for x in 0..width {
                let up = if y > 0 { sums[k - width] } else { 0 };
                let left = if x > 0 { sums[k - 1] } else { 0 };
                let diag = if x > 0 && y > 0 { sums[k - width - 1] } else { 0 };
                sums[k] = u64::from(pixels[k]) + up + left - diag;
                instrument::count_mem(4);
                instrument::count_ops(3);
                k += 1;
            }
        }

        Ok(Self {
            sums,
            width,
            height,
        })
    }

    /// Returns the table width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the table height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sum of all samples in `[0, x] x [0, y]`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the table.
    pub fn at(&self, x: usize, y: usize) -> u64 {
        assert!(x < self.width && y < self.height, "table position out of range");
        self.sums[x + self.width * y]
    }

    /// Sum of the samples in the inclusive window `[x0, x1] x [y0, y1]`.
    ///
    /// Rows above `y0 == 0` and columns left of `x0 == 0` contribute zero.
    pub fn window_sum(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
        debug_assert!(x0 <= x1 && y0 <= y1);
        let total = self.at(x1, y1);
        let left = if x0 > 0 { self.at(x0 - 1, y1) } else { 0 };
        let above = if y0 > 0 { self.at(x1, y0 - 1) } else { 0 };
        let corner = if x0 > 0 && y0 > 0 {
            self.at(x0 - 1, y0 - 1)
        } else {
            0
        };
        (total + corner) - (left + above)
    }
}

#[cfg(test)]
mod tests {
    use super::SummedAreaTable;
    use crate::GrayMap;

    fn sample() -> GrayMap {
        GrayMap::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 3, 255).unwrap()
    }

    #[test]
    fn prefix_sums_are_inclusive() {
        let table = SummedAreaTable::build(&sample()).unwrap();
        assert_eq!(table.at(0, 0), 1);
        assert_eq!(table.at(2, 0), 6);
        assert_eq!(table.at(0, 2), 12);
        assert_eq!(table.at(1, 1), 12);
        assert_eq!(table.at(2, 2), 45);
    }

    #[test]
    fn window_sum_handles_edges() {
        let table = SummedAreaTable::build(&sample()).unwrap();
        assert_eq!(table.window_sum(0, 0, 2, 2), 45);
        assert_eq!(table.window_sum(1, 1, 1, 1), 5);
        assert_eq!(table.window_sum(1, 0, 2, 1), 2 + 3 + 5 + 6);
        assert_eq!(table.window_sum(0, 1, 1, 2), 4 + 5 + 7 + 8);
        assert_eq!(table.window_sum(1, 1, 2, 2), 5 + 6 + 8 + 9);
    }

    #[test]
    fn empty_image_builds_empty_table() {
        let img = GrayMap::new(0, 5, 255).unwrap();
        let table = SummedAreaTable::build(&img).unwrap();
        assert_eq!(table.width(), 0);
        assert_eq!(table.height(), 5);
    }
}
