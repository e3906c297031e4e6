use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::{AU, CLOSE_DISTANCE_AU, DANGER_DISTANCE_AU};
use crate::core::body::Body;

/// Warning level derived from the planet–asteroid distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProximityLevel {
    Safe,
    Close,
    Danger,
    /// The impact has already happened this run.
    Collided,
}

impl ProximityLevel {
    /// Classifies a separation given in astronomical units.
    pub fn from_distance_au(distance_au: f64) -> Self {
        if distance_au < DANGER_DISTANCE_AU {
            ProximityLevel::Danger
        } else if distance_au < CLOSE_DISTANCE_AU {
            ProximityLevel::Close
        } else {
            ProximityLevel::Safe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProximityLevel::Safe => "Safe",
            ProximityLevel::Close => "Close",
            ProximityLevel::Danger => "Danger",
            ProximityLevel::Collided => "Collision",
        }
    }
}

/// Current planet–asteroid separation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Proximity {
    pub distance_m: f64,
    pub distance_au: f64,
    pub level: ProximityLevel,
}

/// One-shot record of the planet–asteroid collision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEvent {
    pub planet: String,
    pub asteroid: String,
    /// Magnitude of the relative velocity at contact (m/s).
    pub relative_speed: f64,
    /// Planet plus asteroid mass (kg).
    pub combined_mass: f64,
    /// Asteroid mass (kg), the mass that drives the energy assessment.
    pub impactor_mass: f64,
    /// Externally supplied entry angle (degrees).
    pub entry_angle_deg: f64,
    /// Midpoint of the two centres at contact.
    pub impact_point: DVec3,
    /// Tick index at which contact was detected.
    pub tick: u64,
}

/// Planet/asteroid contact test with a latch that holds until reset.
#[derive(Debug, Clone, Default)]
pub struct CollisionDetector {
    impact_occurred: bool,
}

impl CollisionDetector {
    pub fn new() -> Self {
        Self {
            impact_occurred: false,
        }
    }

    pub fn impact_occurred(&self) -> bool {
        self.impact_occurred
    }

    pub fn reset(&mut self) {
        self.impact_occurred = false;
    }

    /// Tests the planet against the asteroid and latches on first contact.
    ///
    /// Returns `None` once an impact has been recorded, until [`reset`](Self::reset).
    pub fn detect(
        &mut self,
        bodies: &[Body],
        entry_angle_deg: f64,
        tick: u64,
    ) -> Option<ImpactEvent> {
        if self.impact_occurred {
            return None;
        }

        let (planet, asteroid) = Self::find_pair(bodies)?;
        let distance = planet.distance_to(asteroid);
        if distance >= planet.radius() + asteroid.radius() {
            return None;
        }

        self.impact_occurred = true;
        Some(ImpactEvent {
            planet: planet.name.clone(),
            asteroid: asteroid.name.clone(),
            relative_speed: (asteroid.velocity - planet.velocity).length(),
            combined_mass: planet.mass() + asteroid.mass(),
            impactor_mass: asteroid.mass(),
            entry_angle_deg,
            impact_point: (planet.position + asteroid.position) * 0.5,
            tick,
        })
    }

    /// Current separation, independent of whether contact has happened.
    ///
    /// Once an impact is latched the level reads `Collided`; the distance stays live.
    pub fn proximity(&self, bodies: &[Body]) -> Option<Proximity> {
        let (planet, asteroid) = Self::find_pair(bodies)?;
        let distance_m = planet.distance_to(asteroid);
        let distance_au = distance_m / AU;
        let level = if self.impact_occurred {
            ProximityLevel::Collided
        } else {
            ProximityLevel::from_distance_au(distance_au)
        };
        Some(Proximity {
            distance_m,
            distance_au,
            level,
        })
    }

    fn find_pair(bodies: &[Body]) -> Option<(&Body, &Body)> {
        let planet = bodies
            .iter()
            .find(|b| b.kind.capabilities().collision_target)?;
        let asteroid = bodies.iter().find(|b| b.kind.capabilities().impactor)?;
        Some((planet, asteroid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_thresholds() {
        assert_eq!(ProximityLevel::from_distance_au(0.0005), ProximityLevel::Danger);
        assert_eq!(ProximityLevel::from_distance_au(0.001), ProximityLevel::Close);
        assert_eq!(ProximityLevel::from_distance_au(0.19), ProximityLevel::Close);
        assert_eq!(ProximityLevel::from_distance_au(0.2), ProximityLevel::Safe);
    }
}
