use approx::assert_relative_eq;
use asteroid_impact::config::{AU, DEFAULT_TIME_STEP, EARTH_MASS, EARTH_ORBITAL_SPEED, SUN_MASS};
use asteroid_impact::utils::{angular_momentum, linear_momentum, total_energy};
use asteroid_impact::*;

fn sun_and_earth() -> Vec<Body> {
    let sun = Body::new("Sun", BodyKind::Star, SUN_MASS, 0.25 * AU).unwrap();
    let earth = Body::new("Earth", BodyKind::Planet, EARTH_MASS, 0.12 * AU)
        .unwrap()
        .with_position(DVec3::new(AU, 0.0, 0.0))
        .with_velocity(DVec3::new(0.0, EARTH_ORBITAL_SPEED, 0.0));
    vec![sun, earth]
}

#[test]
fn test_pairwise_forces_obey_third_law() {
    let mut bodies = vec![
        Body::new("a", BodyKind::Planet, 3.0e24, 1.0).unwrap(),
        Body::new("b", BodyKind::Moon, 7.0e22, 1.0)
            .unwrap()
            .with_position(DVec3::new(4.0e8, -1.0e8, 2.0e7)),
        Body::new("c", BodyKind::Asteroid, 1.0e15, 1.0)
            .unwrap()
            .with_position(DVec3::new(-2.0e9, 5.0e8, 0.0)),
    ];

    GravityAccumulator::new().accumulate(&mut bodies);

    let net: DVec3 = bodies.iter().map(|b| b.accumulated_force).sum();
    let largest = bodies
        .iter()
        .map(|b| b.accumulated_force.length())
        .fold(0.0, f64::max);
    assert!(net.length() <= largest * 1e-12, "net force {net}");

    let on_a = pairwise_force(&bodies[0], &bodies[1]);
    let on_b = pairwise_force(&bodies[1], &bodies[0]);
    assert_relative_eq!(on_a.x, -on_b.x, max_relative = 1e-12);
    assert_relative_eq!(on_a.y, -on_b.y, max_relative = 1e-12);
    assert_relative_eq!(on_a.z, -on_b.z, max_relative = 1e-12);
}

#[test]
fn test_force_magnitude_matches_newton() {
    let force = gravitational_force(DVec3::ZERO, SUN_MASS, DVec3::new(AU, 0.0, 0.0), EARTH_MASS);
    let expected = config::G * SUN_MASS * EARTH_MASS / (AU * AU);
    assert_relative_eq!(force.x, expected, max_relative = 1e-12);
    assert_eq!(force.y, 0.0);
}

#[test]
fn test_coincident_bodies_exert_no_force() {
    let position = DVec3::new(1.0, 2.0, 3.0);
    assert_eq!(gravitational_force(position, 1.0e20, position, 1.0e20), DVec3::ZERO);

    let mut bodies = vec![
        Body::new("a", BodyKind::Planet, 1.0e20, 1.0).unwrap().with_position(position),
        Body::new("b", BodyKind::Moon, 1.0e20, 1.0).unwrap().with_position(position),
    ];
    GravityAccumulator::new().accumulate(&mut bodies);
    for body in &bodies {
        assert!(body.accumulated_force.is_finite());
        assert_eq!(body.accumulated_force, DVec3::ZERO);
    }
}

#[test]
fn test_accumulation_starts_from_zero_each_step() {
    let mut bodies = sun_and_earth();
    let accumulator = GravityAccumulator::new();
    accumulator.accumulate(&mut bodies);
    let first = bodies[1].accumulated_force;
    accumulator.accumulate(&mut bodies);
    assert_eq!(bodies[1].accumulated_force, first);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_accumulation_matches_sequential() {
    let mut sequential = sun_and_earth();
    sequential.push(
        Body::new("Rock", BodyKind::Asteroid, 1.0e16, 1.0)
            .unwrap()
            .with_position(DVec3::new(1.3 * AU, 0.2 * AU, 0.0)),
    );
    let mut parallel = sequential.clone();

    GravityAccumulator::new().accumulate(&mut sequential);
    let mut accumulator = GravityAccumulator::new();
    accumulator.set_parallel(true);
    accumulator.accumulate(&mut parallel);

    for (s, p) in sequential.iter().zip(&parallel) {
        assert_relative_eq!(s.accumulated_force.x, p.accumulated_force.x, max_relative = 1e-9);
        assert_relative_eq!(s.accumulated_force.y, p.accumulated_force.y, max_relative = 1e-9);
    }
}

#[test]
fn test_symplectic_step_uses_updated_velocity() {
    let mut bodies = sun_and_earth();
    let integrator = Integrator::new(DEFAULT_TIME_STEP);
    GravityAccumulator::new().accumulate(&mut bodies);
    let force = bodies[1].accumulated_force;
    let start = bodies[1].position;

    integrator.step(&mut bodies, IntegrationMode::Active);

    let velocity =
        DVec3::new(0.0, EARTH_ORBITAL_SPEED, 0.0) + force / EARTH_MASS * DEFAULT_TIME_STEP;
    assert_eq!(bodies[1].velocity, velocity);
    assert_eq!(bodies[1].position, start + velocity * DEFAULT_TIME_STEP);
}

#[test]
fn test_warm_up_holds_the_star_in_place() {
    let mut bodies = sun_and_earth();
    GravityAccumulator::new().accumulate(&mut bodies);
    Integrator::default().step(&mut bodies, IntegrationMode::WarmUp);

    assert_eq!(bodies[0].position, DVec3::ZERO);
    assert_eq!(bodies[0].velocity, DVec3::ZERO);
    assert_ne!(bodies[1].position, DVec3::new(AU, 0.0, 0.0));
}

#[test]
fn test_invalid_time_step_falls_back_to_default() {
    assert_eq!(Integrator::new(0.0).time_step(), DEFAULT_TIME_STEP);
    assert_eq!(Integrator::new(-3.0).time_step(), DEFAULT_TIME_STEP);
    assert_eq!(Integrator::new(f64::NAN).time_step(), DEFAULT_TIME_STEP);

    assert_eq!(
        dynamics::validate_time_step(-3.0),
        Err(SimError::InvalidTimeStep(-3.0))
    );
    assert_eq!(dynamics::validate_time_step(60.0), Ok(60.0));

    let mut integrator = Integrator::new(60.0);
    integrator.set_time_step(f64::INFINITY);
    assert_eq!(integrator.time_step(), DEFAULT_TIME_STEP);
}

#[test]
fn test_two_body_orbit_conserves_energy_and_angular_momentum() {
    let mut bodies = sun_and_earth();
    let accumulator = GravityAccumulator::new();
    let integrator = Integrator::new(DEFAULT_TIME_STEP);

    let energy_before = total_energy(&bodies);
    let angular_before = angular_momentum(&bodies);
    let momentum_before = linear_momentum(&bodies);

    // One simulated year.
    for _ in 0..3650 {
        accumulator.accumulate(&mut bodies);
        integrator.step(&mut bodies, IntegrationMode::Active);
    }

    let energy_after = total_energy(&bodies);
    let drift = ((energy_after - energy_before) / energy_before).abs();
    assert!(drift < 1e-2, "relative energy drift {drift}");

    let angular_after = angular_momentum(&bodies);
    assert_relative_eq!(angular_after.z, angular_before.z, max_relative = 1e-9);

    let momentum_after = linear_momentum(&bodies);
    assert!(
        (momentum_after - momentum_before).length() <= momentum_before.length() * 1e-9,
        "linear momentum drifted to {momentum_after}"
    );

    // Back near the starting side of the orbit after a year.
    let earth = &bodies[1];
    assert!(earth.position.x > 0.9 * AU, "earth at {}", earth.position);
}
