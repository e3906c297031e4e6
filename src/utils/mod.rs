//! Utility helpers: orbital math, logging, and tick profiling.

pub mod logging;
pub mod math;
pub mod profiling;

pub use math::*;
pub use profiling::TickProfile;
