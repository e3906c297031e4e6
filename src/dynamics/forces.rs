use std::borrow::BorrowMut;

use glam::DVec3;

use super::{as_body, as_body_mut};
use crate::config::G;
use crate::core::body::Body;

/// Newtonian attraction exerted on a point mass at `p1` by one at `p2`.
///
/// Coincident positions produce no force.
pub fn gravitational_force(p1: DVec3, m1: f64, p2: DVec3, m2: f64) -> DVec3 {
    let r = p2 - p1;
    let distance = r.length();
    if distance == 0.0 {
        return DVec3::ZERO;
    }
    let magnitude = G * m1 * m2 / (distance * distance);
    r * (magnitude / distance)
}

/// Force on `a` due to `b`.
pub fn pairwise_force(a: &Body, b: &Body) -> DVec3 {
    gravitational_force(a.position, a.mass(), b.position, b.mass())
}

/// Exact pairwise gravity over whatever body set it is handed.
///
/// Which bodies take part in a step is decided by the caller.
#[derive(Debug, Clone, Default)]
pub struct GravityAccumulator {
    parallel: bool,
}

impl GravityAccumulator {
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Switches to per-body parallel summation. Has no effect without the `parallel` feature.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Clears and recomputes `accumulated_force` for every body in `bodies`.
    ///
    /// Accepts both owned bodies and a filtered list of `&mut Body`.
    pub fn accumulate<B: BorrowMut<Body>>(&self, bodies: &mut [B]) {
        for body in bodies.iter_mut() {
            as_body_mut(body).accumulated_force = DVec3::ZERO;
        }

        if self.parallel {
            self.accumulate_parallel(bodies);
        } else {
            self.accumulate_pairs(bodies);
        }
    }

    fn accumulate_pairs<B: BorrowMut<Body>>(&self, bodies: &mut [B]) {
        let n = bodies.len();
        for i in 0..n {
            let (pi, mi) = point_mass(as_body(&bodies[i]));
            for j in (i + 1)..n {
                let (pj, mj) = point_mass(as_body(&bodies[j]));
                let force = gravitational_force(pi, mi, pj, mj);
                as_body_mut(&mut bodies[i]).accumulated_force += force;
                as_body_mut(&mut bodies[j]).accumulated_force -= force;
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn accumulate_parallel<B: BorrowMut<Body>>(&self, bodies: &mut [B]) {
        use rayon::prelude::*;

        let state: Vec<(DVec3, f64)> = bodies.iter().map(|b| point_mass(as_body(b))).collect();

        let forces: Vec<DVec3> = (0..state.len())
            .into_par_iter()
            .map(|i| {
                let (pi, mi) = state[i];
                state
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .fold(DVec3::ZERO, |acc, (_, &(pj, mj))| {
                        acc + gravitational_force(pi, mi, pj, mj)
                    })
            })
            .collect();

        for (body, force) in bodies.iter_mut().zip(forces) {
            as_body_mut(body).accumulated_force = force;
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn accumulate_parallel<B: BorrowMut<Body>>(&self, bodies: &mut [B]) {
        self.accumulate_pairs(bodies);
    }
}

fn point_mass(body: &Body) -> (DVec3, f64) {
    (body.position, body.mass())
}
