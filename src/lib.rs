//! Asteroid Impact – physics core for a Sun/Earth/Moon/asteroid scenario.
//!
//! The crate integrates mutual Newtonian gravity with a fixed-step symplectic
//! Euler scheme, detects the single planet–asteroid collision of a run, and
//! classifies the impact into a severity class and concentric risk zones.
//! Rendering and map drawing live outside the crate; the impact map is reached
//! through the [`MapGenerator`] trait.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod impact;
pub mod map;
pub mod presets;
pub mod utils;
pub mod world;

pub use glam::DVec3;

pub use crate::collision::{CollisionDetector, ImpactEvent, Proximity, ProximityLevel};
pub use crate::core::{Body, BodyKind, BodyRegistry, BodySnapshot, Capabilities};
pub use crate::dynamics::{
    gravitational_force, pairwise_force, GravityAccumulator, IntegrationMode, Integrator,
};
pub use crate::error::{Result, SimError};
pub use crate::impact::{classify_impact, ImpactAssessment, ImpactCategory, RiskLevel, RiskZone};
pub use crate::map::{
    MapArtifact, MapGenerator, MapRequest, NoopMapGenerator, RecordingMapGenerator,
};
pub use crate::presets::{
    find_real_asteroid, real_asteroids, AsteroidInput, AsteroidParams, ImpactSite, QuickPreset,
    RealAsteroid, ThreatLevel,
};
pub use crate::world::{
    canonical_bodies, ImpactReport, SimulationClock, SimulationState, SimulationWorld, Telemetry,
    TickReport,
};
