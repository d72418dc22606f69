#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod timing;

pub use error::Error;
pub use timing::{SlideshowTiming, TimingError};
