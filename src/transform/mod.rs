//! Geometric transforms and compositing.
//!
//! `rotate`, `mirror` and `crop` return new images; `paste` and `blend`
//! modify their destination in place.

pub mod compose;
pub mod geometric;

pub use compose::{blend, paste};
pub use geometric::{crop, mirror, rotate};
