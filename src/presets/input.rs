use log::warn;
use serde::{Deserialize, Serialize};

use super::{AsteroidParams, ImpactSite, QuickPreset, RealAsteroid};
use crate::config::{
    AU, DEFAULT_ASTEROID_MASS, DEFAULT_ASTEROID_POSITION_AU, DEFAULT_ASTEROID_VELOCITY_KMS,
    DEFAULT_ENTRY_ANGLE_DEG, DEFAULT_IMPACT_LATITUDE, DEFAULT_IMPACT_LONGITUDE,
};
use crate::error::SimError;

/// Raw text from the asteroid and impact-site controls.
///
/// Units follow the controls: kilograms, AU, km/s, and degrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsteroidInput {
    pub mass: String,
    pub position: [String; 3],
    pub velocity: [String; 3],
    pub latitude: String,
    pub longitude: String,
    pub entry_angle: String,
}

impl Default for AsteroidInput {
    fn default() -> Self {
        Self::from_params(&AsteroidParams::default())
    }
}

impl AsteroidInput {
    /// Fills the controls from resolved parameters.
    pub fn from_params(params: &AsteroidParams) -> Self {
        let position = params.position_m / AU;
        let velocity = params.velocity_mps / 1000.0;
        Self {
            mass: format!("{:e}", params.mass_kg),
            position: position.to_array().map(|v| v.to_string()),
            velocity: velocity.to_array().map(|v| v.to_string()),
            latitude: params.site.latitude.to_string(),
            longitude: params.site.longitude.to_string(),
            entry_angle: params.site.entry_angle_deg.to_string(),
        }
    }

    pub fn from_preset(preset: QuickPreset) -> Self {
        Self::from_params(&preset.params())
    }

    pub fn from_real_asteroid(asteroid: &RealAsteroid) -> Self {
        Self::from_params(&asteroid.params())
    }

    /// Parses every field, substituting the documented default for each field that fails.
    ///
    /// Returns the resolved parameters and one error per substituted field.
    pub fn resolve(&self) -> (AsteroidParams, Vec<SimError>) {
        let mut errors = Vec::new();

        let mass = parse_field("mass", &self.mass, DEFAULT_ASTEROID_MASS, &mut errors);
        let mass = if mass > 0.0 {
            mass
        } else {
            warn!("asteroid mass {mass} is not positive, using {DEFAULT_ASTEROID_MASS}");
            errors.push(SimError::InvalidMass(mass));
            DEFAULT_ASTEROID_MASS
        };

        const POSITION_FIELDS: [&str; 3] = ["position.x", "position.y", "position.z"];
        const VELOCITY_FIELDS: [&str; 3] = ["velocity.x", "velocity.y", "velocity.z"];
        let position = std::array::from_fn(|i| {
            parse_field(
                POSITION_FIELDS[i],
                &self.position[i],
                DEFAULT_ASTEROID_POSITION_AU[i],
                &mut errors,
            )
        });
        let velocity = std::array::from_fn(|i| {
            parse_field(
                VELOCITY_FIELDS[i],
                &self.velocity[i],
                DEFAULT_ASTEROID_VELOCITY_KMS[i],
                &mut errors,
            )
        });

        let site = ImpactSite {
            latitude: parse_field("latitude", &self.latitude, DEFAULT_IMPACT_LATITUDE, &mut errors),
            longitude: parse_field(
                "longitude",
                &self.longitude,
                DEFAULT_IMPACT_LONGITUDE,
                &mut errors,
            ),
            entry_angle_deg: parse_field(
                "entry_angle",
                &self.entry_angle,
                DEFAULT_ENTRY_ANGLE_DEG,
                &mut errors,
            ),
        };

        (
            AsteroidParams::from_display_units(mass, position, velocity, site),
            errors,
        )
    }
}

fn parse_field(field: &'static str, raw: &str, default: f64, errors: &mut Vec<SimError>) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!("could not parse {field} from {raw:?}, using {default}");
            errors.push(SimError::InvalidInput {
                field,
                value: raw.to_owned(),
            });
            default
        }
    }
}
