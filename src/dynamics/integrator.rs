use std::borrow::BorrowMut;

use log::warn;
use serde::{Deserialize, Serialize};

use super::as_body_mut;
use crate::config::DEFAULT_TIME_STEP;
use crate::core::body::Body;
use crate::error::{Result, SimError};

/// Integration regime of the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationMode {
    /// No asteroid yet; the star is held fixed while the rest orbit it.
    WarmUp,
    /// Asteroid present; every body moves.
    Active,
}

/// Semi-implicit Euler integrator with a fixed time step.
#[derive(Debug, Clone)]
pub struct Integrator {
    time_step: f64,
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

impl Integrator {
    /// Creates an integrator. Invalid steps fall back to [`DEFAULT_TIME_STEP`].
    pub fn new(time_step: f64) -> Self {
        Self {
            time_step: sanitize_time_step(time_step),
        }
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn set_time_step(&mut self, time_step: f64) {
        self.time_step = sanitize_time_step(time_step);
    }

    pub fn integrate_velocity(&self, body: &mut Body, dt: f64) {
        let acceleration = body.accumulated_force / body.mass();
        body.velocity += acceleration * dt;
    }

    pub fn integrate_position(&self, body: &mut Body, dt: f64) {
        body.position += body.velocity * dt;
    }

    /// Advances every body the mode allows to move by one step.
    ///
    /// Forces must already be accumulated from the pre-step positions.
    pub fn step<B: BorrowMut<Body>>(&self, bodies: &mut [B], mode: IntegrationMode) {
        for body in bodies.iter_mut() {
            let body = as_body_mut(body);
            if !body.kind.is_integrated_in(mode) {
                continue;
            }
            self.integrate_velocity(body, self.time_step);
            self.integrate_position(body, self.time_step);
        }
    }
}

/// Checks that a step is strictly positive and finite.
pub fn validate_time_step(time_step: f64) -> Result<f64> {
    if time_step.is_finite() && time_step > 0.0 {
        Ok(time_step)
    } else {
        Err(SimError::InvalidTimeStep(time_step))
    }
}

pub(crate) fn sanitize_time_step(time_step: f64) -> f64 {
    validate_time_step(time_step).unwrap_or_else(|err| {
        warn!("{err}, using default {DEFAULT_TIME_STEP}");
        DEFAULT_TIME_STEP
    })
}
