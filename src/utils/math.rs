//! Orbital helpers layered on top of `glam`.

use glam::DVec3;

use crate::config::G;
use crate::core::body::Body;

/// Speed of a circular orbit at `distance` around `central_mass`.
pub fn circular_orbit_speed(central_mass: f64, distance: f64) -> f64 {
    (G * central_mass / distance).sqrt()
}

/// Sum of pairwise gravitational potential energies. Coincident pairs contribute nothing.
pub fn potential_energy(bodies: &[Body]) -> f64 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let distance = a.distance_to(b);
            if distance > 0.0 {
                energy -= G * a.mass() * b.mass() / distance;
            }
        }
    }
    energy
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Total mechanical energy of the set.
pub fn total_energy(bodies: &[Body]) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies)
}

/// Total angular momentum about the origin.
pub fn angular_momentum(bodies: &[Body]) -> DVec3 {
    bodies
        .iter()
        .map(|b| b.position.cross(b.momentum()))
        .fold(DVec3::ZERO, |acc, l| acc + l)
}

pub fn linear_momentum(bodies: &[Body]) -> DVec3 {
    bodies
        .iter()
        .map(Body::momentum)
        .fold(DVec3::ZERO, |acc, p| acc + p)
}
