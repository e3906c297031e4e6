use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{AsteroidParams, ImpactSite};
use crate::config::DEFAULT_ASTEROID_DENSITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatLevel {
    None,
    VeryLow,
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    /// Entry angle assumed for an object of this threat level.
    pub fn entry_angle_deg(&self) -> f64 {
        match self {
            ThreatLevel::High => 30.0,
            ThreatLevel::Medium => 45.0,
            _ => 60.0,
        }
    }

    pub fn color_label(&self) -> &'static str {
        match self {
            ThreatLevel::None => "Green",
            ThreatLevel::VeryLow => "Yellow",
            ThreatLevel::Low => "Orange",
            ThreatLevel::Medium => "Red",
            ThreatLevel::High => "Critical",
        }
    }
}

/// Catalog entry for a known asteroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealAsteroid {
    pub name: String,
    pub description: String,
    pub diameter_km: f64,
    /// Measured mass; derived from the diameter when absent.
    #[serde(default)]
    pub mass_kg: Option<f64>,
    pub orbit_distance_au: f64,
    pub velocity_kms: f64,
    pub threat_level: ThreatLevel,
    pub discovery_year: u16,
    /// Latitude and longitude of the illustrative impact site.
    pub coordinates: [f64; 2],
}

impl RealAsteroid {
    /// Mass from the record, or a uniform sphere of the catalog diameter at 2000 kg/m³.
    pub fn mass(&self) -> f64 {
        self.mass_kg.unwrap_or_else(|| {
            let radius_m = self.diameter_km * 1000.0 / 2.0;
            4.0 / 3.0 * PI * radius_m.powi(3) * DEFAULT_ASTEROID_DENSITY
        })
    }

    /// Places the asteroid on the +x axis at its orbital distance moving along +y.
    pub fn params(&self) -> AsteroidParams {
        AsteroidParams::from_display_units(
            self.mass(),
            [self.orbit_distance_au, 0.0, 0.0],
            [0.0, self.velocity_kms, 0.0],
            ImpactSite {
                latitude: self.coordinates[0],
                longitude: self.coordinates[1],
                entry_angle_deg: self.threat_level.entry_angle_deg(),
            },
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    description: &str,
    diameter_km: f64,
    mass_kg: f64,
    orbit_distance_au: f64,
    velocity_kms: f64,
    threat_level: ThreatLevel,
    discovery_year: u16,
    coordinates: [f64; 2],
) -> RealAsteroid {
    RealAsteroid {
        name: name.to_owned(),
        description: description.to_owned(),
        diameter_km,
        mass_kg: Some(mass_kg),
        orbit_distance_au,
        velocity_kms,
        threat_level,
        discovery_year,
        coordinates,
    }
}

/// Built-in catalog of well-known asteroids.
pub fn real_asteroids() -> Vec<RealAsteroid> {
    vec![
        entry(
            "99942 Apophis",
            "Potentially hazardous asteroid, closest approach to Earth in 2029",
            0.34,
            6.1e10,
            1.1,
            30.7,
            ThreatLevel::Medium,
            2004,
            [40.7128, -74.0060],
        ),
        entry(
            "101955 Bennu",
            "B-type asteroid, target of OSIRIS-REx mission",
            0.49,
            7.8e10,
            1.2,
            28.0,
            ThreatLevel::Low,
            1999,
            [51.5074, -0.1278],
        ),
        entry(
            "1 Ceres",
            "Largest object in the asteroid belt, dwarf planet",
            939.4,
            9.1e20,
            2.8,
            17.9,
            ThreatLevel::None,
            1801,
            [41.9028, 12.4964],
        ),
        entry(
            "4 Vesta",
            "Second most massive asteroid in the asteroid belt",
            525.4,
            2.6e20,
            2.4,
            19.3,
            ThreatLevel::None,
            1807,
            [48.8566, 2.3522],
        ),
        entry(
            "1036 Ganymed",
            "Large Amor-type asteroid, first discovered of its type",
            31.7,
            3.3e16,
            1.6,
            23.5,
            ThreatLevel::VeryLow,
            1924,
            [52.5200, 13.4050],
        ),
        entry(
            "1566 Icarus",
            "Apollo group asteroid with highly eccentric orbit",
            1.4,
            3.6e12,
            1.1,
            34.0,
            ThreatLevel::Low,
            1949,
            [35.6762, 139.6503],
        ),
        entry(
            "433 Eros",
            "Amor group asteroid, first asteroid orbited by a spacecraft",
            16.8,
            6.7e15,
            1.5,
            24.4,
            ThreatLevel::VeryLow,
            1898,
            [55.7558, 37.6176],
        ),
        entry(
            "2101 Adonis",
            "Apollo group asteroid, potentially hazardous object",
            1.0,
            1.8e12,
            1.0,
            31.2,
            ThreatLevel::Medium,
            1936,
            [50.4501, 30.5234],
        ),
    ]
}

/// Looks up a catalog entry by full name ("99942 Apophis") or short name ("Apophis").
pub fn find_real_asteroid(name: &str) -> Option<RealAsteroid> {
    real_asteroids().into_iter().find(|asteroid| {
        asteroid.name.eq_ignore_ascii_case(name)
            || asteroid
                .name
                .split_whitespace()
                .nth(1)
                .is_some_and(|short| short.eq_ignore_ascii_case(name))
    })
}
