//! 256-entry pixel-to-pixel lookup tables.

use crate::image::GrayMap;
use crate::instrument;
use crate::trace::trace_span;
use crate::util::math::round_clamp;

/// Number of entries in a lookup table (one per possible sample value).
pub const LUT_LEN: usize = 256;

/// Pixel-to-pixel mapping applied to every sample of an image.
///
/// A map starts as the identity and each builder step rewrites the current
/// entries, so `identity().negative(m).threshold(t, v)` first negates and then
/// thresholds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupMap {
    table: [u8; LUT_LEN],
}

impl Default for LookupMap {
    fn default() -> Self {
        Self::identity()
    }
}

impl LookupMap {
    /// Identity mapping `p -> p`.
    pub fn identity() -> Self {
        let mut table = [0u8; LUT_LEN];
        for (p, entry) in table.iter_mut().enumerate() {
            *entry = p as u8;
        }
        Self { table }
    }

    /// Photographic negative: `p -> max(0, maxval - p)`.
    pub fn negative(mut self, maxval: u8) -> Self {
        for entry in self.table.iter_mut() {
            *entry = maxval.saturating_sub(*entry);
        }
        self
    }

    /// Step function: `p -> tread` if `p >= thr`, otherwise `0`.
    pub fn threshold(mut self, thr: u8, tread: u8) -> Self {
        for entry in self.table.iter_mut() {
            *entry = if *entry >= thr { tread } else { 0 };
        }
        self
    }

    /// Affine map `p -> m * p + b`, rounded half-up and saturated to
    /// `[0, maxval]`.
    pub fn affine(mut self, m: f64, b: f64, maxval: u8) -> Self {
        for entry in self.table.iter_mut() {
            *entry = round_clamp(m * f64::from(*entry) + b, maxval);
        }
        self
    }

    /// Returns the output level for input level `p`.
    pub fn get(&self, p: u8) -> u8 {
        self.table[usize::from(p)]
    }

    /// Returns the raw table.
    pub fn as_table(&self) -> &[u8; LUT_LEN] {
        &self.table
    }

    /// Rewrites every sample of `img` in place as `map[sample]`.
    pub fn apply(&self, img: &mut GrayMap) {
        let _span = trace_span!("lut_apply", width = img.width(), height = img.height()).entered();
        let data = img.data_mut();
        for sample in data.iter_mut() {
            *sample = self.table[usize::from(*sample)];
        }
        instrument::count_mem(2 * data.len() as u64);
    }
}
