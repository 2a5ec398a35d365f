//! Graymap is a small raster engine for 8-bit grayscale images.
//!
//! The crate provides an owned pixel buffer ([`GrayMap`]) with point
//! transforms driven by lookup tables, geometric transforms, exact subimage
//! search, and a box blur built on a summed-area table. Binary PGM files are
//! read and written natively; other formats are available through the
//! `image-io` feature.

pub mod filter;
pub mod image;
pub mod instrument;
pub mod point;
pub mod search;
mod trace;
pub mod transform;
pub mod util;

pub use filter::{blur, SummedAreaTable};
pub use crate::image::pgm::{load_pgm, read_pgm, save_pgm, write_pgm};
pub use crate::image::{GrayMap, PIX_MAX};
pub use point::{brighten, negative, threshold, LookupMap};
pub use search::{locate_subimage, match_subimage};
pub use transform::{blend, crop, mirror, paste, rotate};
pub use util::{GrayMapError, GrayMapResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
