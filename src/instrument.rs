//! Work counters for pixel-level operations.
//!
//! Two counters are kept per thread:
//! - `pixmem` counts individual pixel memory accesses (every get/set, every
//!   raster read or write inside bulk loops);
//! - `pixops` counts arithmetic and comparison operations on pixel values.
//!
//! Counters are thread-local so independent callers (and parallel test
//! threads) never observe each other's work.

use std::cell::Cell;
use std::time::{Duration, Instant};

thread_local! {
    static PIXMEM: Cell<u64> = const { Cell::new(0) };
    static PIXOPS: Cell<u64> = const { Cell::new(0) };
    static EPOCH: Cell<Option<Instant>> = const { Cell::new(None) };
}

#[inline]
pub(crate) fn count_mem(n: u64) {
    PIXMEM.with(|c| c.set(c.get().wrapping_add(n)));
}

#[inline]
pub(crate) fn count_ops(n: u64) {
    PIXOPS.with(|c| c.set(c.get().wrapping_add(n)));
}

/// Counter values and wall time since the last [`reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counters {
    /// Pixel memory accesses.
    pub pixmem: u64,
    /// Pixel arithmetic/comparison operations.
    pub pixops: u64,
    /// Elapsed time since the last reset (zero if never reset).
    pub elapsed: Duration,
}

/// Zeroes both counters and restarts the clock for the calling thread.
pub fn reset() {
    PIXMEM.with(|c| c.set(0));
    PIXOPS.with(|c| c.set(0));
    EPOCH.with(|e| e.set(Some(Instant::now())));
}

/// Reads the current counters of the calling thread.
pub fn snapshot() -> Counters {
    let elapsed = EPOCH
        .with(|e| e.get())
        .map(|start| start.elapsed())
        .unwrap_or_default();
    Counters {
        pixmem: PIXMEM.with(|c| c.get()),
        pixops: PIXOPS.with(|c| c.get()),
        elapsed,
    }
}

/// Scoped measurement of a single operation.
///
/// ```
/// use graymap::instrument::Probe;
/// use graymap::GrayMap;
///
/// let img = GrayMap::new(4, 4, 255).unwrap();
/// let probe = Probe::start();
/// let _ = img.get(1, 1);
/// let counters = probe.finish();
/// assert_eq!(counters.pixmem, 1);
/// ```
pub struct Probe {
    _private: (),
}

impl Probe {
    /// Resets the counters and starts timing.
    pub fn start() -> Self {
        reset();
        Self { _private: () }
    }

    /// Returns the work done since [`Probe::start`].
    pub fn finish(self) -> Counters {
        snapshot()
    }
}
