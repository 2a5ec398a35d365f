//! Subimage search.
//!
//! Exact, brute-force comparison of a small image against every placement in
//! a larger one.

pub mod subimage;

pub use subimage::{locate_subimage, match_subimage};
