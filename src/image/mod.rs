//! Owned 8-bit grayscale raster.
//!
//! `GrayMap` stores `width * height` samples in row-major order with the
//! origin at the top-left corner. Position `(x, y)` lives at index
//! `x + width * y`; that mapping is kept in [`GrayMap::index`] and nowhere
//! else.
//!
//! `maxval` is the white level. Samples above it are representable and every
//! transform clamps its own output to `[0, maxval]`.

use crate::instrument;
use crate::util::{GrayMapError, GrayMapResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod pgm;

/// Largest gray level a sample can hold.
pub const PIX_MAX: u8 = u8::MAX;

/// Owned grayscale image with an explicit white level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayMap {
    data: Vec<u8>,
    width: usize,
    height: usize,
    maxval: u8,
}

/// Allocates a zero-filled vector, reporting failure instead of aborting.
pub(crate) fn try_zeroed<T: Clone + Default>(len: usize) -> GrayMapResult<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| GrayMapError::Allocation { len })?;
    data.resize(len, T::default());
    Ok(data)
}

fn sample_count(width: usize, height: usize) -> GrayMapResult<usize> {
    width
        .checked_mul(height)
        .ok_or(GrayMapError::InvalidDimensions { width, height })
}

impl GrayMap {
    /// Creates a black image.
    ///
    /// # Panics
    ///
    /// Panics if `maxval` is zero.
    pub fn new(width: usize, height: usize, maxval: u8) -> GrayMapResult<Self> {
        assert!(maxval > 0, "maxval must be positive");
        let len = sample_count(width, height)?;
        let data = try_zeroed(len)?;
        Ok(Self {
            data,
            width,
            height,
            maxval,
        })
    }

    /// Wraps already decoded samples.
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize, maxval: u8) -> GrayMapResult<Self> {
        if maxval == 0 {
            return Err(GrayMapError::InvalidMaxval { maxval: 0 });
        }
        let len = sample_count(width, height)?;
        if data.len() != len {
            return Err(GrayMapError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
            maxval,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the white level.
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Returns the raster in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its raster.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns `true` if `(x, y)` lies inside the image.
    pub fn valid_pos(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns `true` if the `w x h` rectangle anchored at `(x, y)` lies
    /// entirely inside the image.
    ///
    /// Both corners must be valid positions, so empty rectangles are never
    /// valid.
    pub fn valid_rect(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        if w == 0 || h == 0 {
            return false;
        }
        let (Some(x2), Some(y2)) = (x.checked_add(w - 1), y.checked_add(h - 1)) else {
            return false;
        };
        self.valid_pos(x, y) && self.valid_pos(x2, y2)
    }

    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.valid_pos(x, y),
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        x + self.width * y
    }

    /// Reads the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        let idx = self.index(x, y);
        instrument::count_mem(1);
        self.data[idx]
    }

    /// Overwrites the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, level: u8) {
        let idx = self.index(x, y);
        instrument::count_mem(1);
        self.data[idx] = level;
    }

    /// Returns the `(min, max)` sample values.
    ///
    /// An empty image reports `(255, 0)`.
    pub fn stats(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((PIX_MAX, 0u8), |(lo, hi), &p| (lo.min(p), hi.max(p)))
    }
}
