//! Scenario inputs consumed by the simulator: impact sites, asteroid parameters,
//! quick presets, the real-asteroid catalog, and lenient parsing of raw user input.

pub mod catalog;
pub mod input;

pub use catalog::{find_real_asteroid, real_asteroids, RealAsteroid, ThreatLevel};
pub use input::AsteroidInput;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::{
    ASTEROID_RADIUS_AU, AU, DEFAULT_ASTEROID_MASS, DEFAULT_ASTEROID_POSITION_AU,
    DEFAULT_ASTEROID_VELOCITY_KMS, DEFAULT_ENTRY_ANGLE_DEG, DEFAULT_IMPACT_LATITUDE,
    DEFAULT_IMPACT_LONGITUDE,
};

/// Geographic target of the impact map and the entry angle fed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactSite {
    pub latitude: f64,
    pub longitude: f64,
    pub entry_angle_deg: f64,
}

impl Default for ImpactSite {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_IMPACT_LATITUDE,
            longitude: DEFAULT_IMPACT_LONGITUDE,
            entry_angle_deg: DEFAULT_ENTRY_ANGLE_DEG,
        }
    }
}

/// Resolved asteroid initial state in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidParams {
    pub mass_kg: f64,
    pub position_m: DVec3,
    pub velocity_mps: DVec3,
    pub radius_m: f64,
    pub site: ImpactSite,
}

impl Default for AsteroidParams {
    fn default() -> Self {
        Self::from_display_units(
            DEFAULT_ASTEROID_MASS,
            DEFAULT_ASTEROID_POSITION_AU,
            DEFAULT_ASTEROID_VELOCITY_KMS,
            ImpactSite::default(),
        )
    }
}

impl AsteroidParams {
    /// Builds parameters from the units the controls use: AU for position, km/s for velocity.
    pub fn from_display_units(
        mass_kg: f64,
        position_au: [f64; 3],
        velocity_kms: [f64; 3],
        site: ImpactSite,
    ) -> Self {
        Self {
            mass_kg,
            position_m: DVec3::from_array(position_au) * AU,
            velocity_mps: DVec3::from_array(velocity_kms) * 1000.0,
            radius_m: ASTEROID_RADIUS_AU * AU,
            site,
        }
    }
}

/// Canned scenarios offered next to the manual controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickPreset {
    Comet,
    NearEarth,
    Impact,
    Belt,
}

impl QuickPreset {
    pub const ALL: [QuickPreset; 4] = [
        QuickPreset::Comet,
        QuickPreset::NearEarth,
        QuickPreset::Impact,
        QuickPreset::Belt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuickPreset::Comet => "Comet",
            QuickPreset::NearEarth => "Near Earth",
            QuickPreset::Impact => "Impact",
            QuickPreset::Belt => "Asteroid Belt",
        }
    }

    pub fn params(&self) -> AsteroidParams {
        let (mass, position, velocity, (latitude, longitude), angle) = match self {
            QuickPreset::Comet => (1e14, [5.0, 0.0, 0.0], [0.0, 8.0, 0.0], (48.86, 2.35), 30.0),
            QuickPreset::NearEarth => {
                (1e16, [1.2, 0.0, 0.0], [0.0, 25.0, 0.0], (40.71, -74.01), 60.0)
            }
            QuickPreset::Impact => {
                (5e16, [1.5, 0.0, 0.0], [-15.0, 20.0, 0.0], (50.45, 30.52), 45.0)
            }
            QuickPreset::Belt => (5e15, [2.8, 0.0, 0.0], [0.0, 18.0, 0.0], (35.68, 139.69), 35.0),
        };
        AsteroidParams::from_display_units(
            mass,
            position,
            velocity,
            ImpactSite {
                latitude,
                longitude,
                entry_angle_deg: angle,
            },
        )
    }
}
