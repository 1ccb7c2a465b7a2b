pub mod analytics;
pub mod error;
pub mod geometry;
pub mod math;
pub mod region;
pub mod tessellation;

pub use error::{GeosphereError, Result};
