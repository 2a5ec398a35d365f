//! Rounding and saturation helpers for gray levels.

/// Rounds `value` half-up and saturates it to `[0, maxval]`.
pub(crate) fn round_clamp(value: f64, maxval: u8) -> u8 {
    if value.is_nan() || value < 0.0 {
        return 0;
    }
    let rounded = (value + 0.5).floor();
    if rounded >= f64::from(maxval) {
        maxval
    } else {
        rounded as u8
    }
}

/// Rounded integer mean `sum / count` using the add-half trick.
pub(crate) fn rounded_mean(sum: u64, count: u64) -> u64 {
    (2 * sum + count) / (2 * count)
}
