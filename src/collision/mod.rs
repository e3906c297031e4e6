//! Planet/asteroid contact detection and proximity warnings.

pub mod detector;

pub use detector::{CollisionDetector, ImpactEvent, Proximity, ProximityLevel};
