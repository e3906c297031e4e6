use glam::DVec3;
use serde::Serialize;

use super::types::{BodySnapshot, BodyKind};
use crate::error::{Result, SimError};

/// Point mass with the kinematic state the integrator advances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    mass: f64,
    pub position: DVec3,
    pub velocity: DVec3,
    radius: f64,
    /// Net force of the current step. Cleared before every accumulation.
    #[serde(skip)]
    pub accumulated_force: DVec3,
}

impl Body {
    /// Creates a body at rest at the origin.
    ///
    /// Mass and radius must be strictly positive and finite.
    pub fn new(name: impl Into<String>, kind: BodyKind, mass: f64, radius: f64) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        Ok(Self {
            name: name.into(),
            kind,
            mass,
            position: DVec3::ZERO,
            velocity: DVec3::ZERO,
            radius,
            accumulated_force: DVec3::ZERO,
        })
    }

    /// Constructor for compile-time body data that is known to be valid.
    pub(crate) fn from_constants(name: &str, kind: BodyKind, mass: f64, radius: f64) -> Self {
        debug_assert!(mass > 0.0 && radius > 0.0);
        Self {
            name: name.to_owned(),
            kind,
            mass,
            position: DVec3::ZERO,
            velocity: DVec3::ZERO,
            radius,
            accumulated_force: DVec3::ZERO,
        }
    }

    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: DVec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn momentum(&self) -> DVec3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance(other.position)
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            name: self.name.clone(),
            kind: self.kind,
            position: self.position,
            velocity: self.velocity,
            radius: self.radius,
            capabilities: self.kind.capabilities(),
        }
    }
}
