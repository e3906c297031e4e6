use serde::{Deserialize, Serialize};

use crate::collision::ProximityLevel;
use crate::dynamics::IntegrationMode;

use super::SimulationState;

/// Status readout refreshed after every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub tick: u64,
    pub elapsed_days: f64,
    pub state: SimulationState,
    pub mode: IntegrationMode,
    pub paused: bool,
    pub planet_star_distance_au: Option<f64>,
    pub planet_moon_distance_au: Option<f64>,
    pub asteroid_planet_distance_au: Option<f64>,
    pub proximity: Option<ProximityLevel>,
    pub map_created: bool,
}

impl Telemetry {
    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            IntegrationMode::WarmUp => "Planet Orbiting",
            IntegrationMode::Active => "Asteroid Active",
        }
    }
}
