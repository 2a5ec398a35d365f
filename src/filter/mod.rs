//! Neighbourhood filters.

pub mod blur;
pub mod integral;

pub use blur::blur;
pub use integral::SummedAreaTable;
