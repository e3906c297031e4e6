use asteroid_impact::config::{AU, EARTH_MASS};
use asteroid_impact::*;

const HEAD_ON_MASS: f64 = 5e16;

fn head_on_world() -> SimulationWorld {
    let mut world = SimulationWorld::default();
    world
        .inject_asteroid(
            HEAD_ON_MASS,
            DVec3::new(1.3 * AU, 0.0, 0.0),
            DVec3::new(-30.0e3, 29.78e3, 0.0),
            0.06 * AU,
        )
        .unwrap();
    world
}

fn run_until_impact(world: &mut SimulationWorld, max_ticks: usize) -> Option<ImpactReport> {
    for _ in 0..max_ticks {
        if let Some(impact) = world.tick().impact {
            return Some(impact);
        }
    }
    None
}

fn body(kind: BodyKind, mass: f64, radius: f64, position: DVec3) -> Body {
    Body::new(format!("{kind:?}"), kind, mass, radius)
        .unwrap()
        .with_position(position)
}

#[test]
fn test_detector_reports_overlap_once() {
    let bodies = vec![
        body(BodyKind::Planet, EARTH_MASS, 10.0, DVec3::ZERO),
        body(BodyKind::Asteroid, 1e12, 5.0, DVec3::new(14.0, 0.0, 0.0))
            .with_velocity(DVec3::new(-2.0, 0.0, 0.0)),
    ];

    let mut detector = CollisionDetector::new();
    let event = detector.detect(&bodies, 45.0, 7).expect("bodies overlap");
    assert_eq!(event.tick, 7);
    assert_eq!(event.relative_speed, 2.0);
    assert_eq!(event.impactor_mass, 1e12);
    assert_eq!(event.combined_mass, EARTH_MASS + 1e12);
    assert_eq!(event.impact_point, DVec3::new(7.0, 0.0, 0.0));
    assert!(detector.impact_occurred());

    assert!(detector.detect(&bodies, 45.0, 8).is_none());
    let proximity = detector.proximity(&bodies).unwrap();
    assert_eq!(proximity.level, ProximityLevel::Collided);
    assert_eq!(proximity.distance_m, 14.0);

    detector.reset();
    assert!(detector.detect(&bodies, 45.0, 9).is_some());
}

#[test]
fn test_touching_exactly_is_not_a_collision() {
    let bodies = vec![
        body(BodyKind::Planet, EARTH_MASS, 10.0, DVec3::ZERO),
        body(BodyKind::Asteroid, 1e12, 5.0, DVec3::new(15.0, 0.0, 0.0)),
    ];
    assert!(CollisionDetector::new().detect(&bodies, 45.0, 1).is_none());
}

#[test]
fn test_only_planet_and_asteroid_collide() {
    let bodies = vec![
        body(BodyKind::Star, 1e30, 10.0, DVec3::ZERO),
        body(BodyKind::Moon, 1e22, 10.0, DVec3::ZERO),
        body(BodyKind::Asteroid, 1e12, 5.0, DVec3::ZERO),
    ];
    let mut detector = CollisionDetector::new();
    assert!(detector.detect(&bodies, 45.0, 1).is_none());
    assert!(detector.proximity(&bodies).is_none());
}

#[test]
fn test_proximity_levels_follow_distance() {
    let planet = body(BodyKind::Planet, EARTH_MASS, 1.0, DVec3::ZERO);
    let detector = CollisionDetector::new();
    let level_at = |distance_au: f64| {
        let asteroid = body(
            BodyKind::Asteroid,
            1e12,
            1.0,
            DVec3::new(distance_au * AU, 0.0, 0.0),
        );
        detector
            .proximity(&[planet.clone(), asteroid])
            .map(|p| p.level)
    };

    assert_eq!(level_at(0.0005), Some(ProximityLevel::Danger));
    assert_eq!(level_at(0.1), Some(ProximityLevel::Close));
    assert_eq!(level_at(0.5), Some(ProximityLevel::Safe));
}

#[test]
fn test_head_on_asteroid_impacts_exactly_once() {
    let mut world = head_on_world();
    let impact = run_until_impact(&mut world, 2_000).expect("asteroid should hit the planet");

    assert_eq!(world.state(), SimulationState::Impacted);
    assert_eq!(impact.event.planet, "Earth");
    assert_eq!(impact.event.impactor_mass, HEAD_ON_MASS);
    assert_eq!(impact.event.entry_angle_deg, 45.0);
    assert!(impact.event.relative_speed > 25.0e3);
    assert_eq!(impact.assessment.category, ImpactCategory::Large);
    assert_eq!(impact.assessment.damage_radius_km, 20_000.0);

    for _ in 0..50 {
        let report = world.tick();
        assert!(report.impact.is_none());
        assert_eq!(report.state, SimulationState::Impacted);
    }
    assert_eq!(world.impact_event(), Some(&impact.event));
}

#[test]
fn test_identical_runs_impact_identically() {
    let mut first = head_on_world();
    let mut second = head_on_world();

    let a = run_until_impact(&mut first, 2_000).expect("first run impacts");
    let b = run_until_impact(&mut second, 2_000).expect("second run impacts");

    assert_eq!(a.event, b.event);
    assert_eq!(a.assessment, b.assessment);
    assert_eq!(first.bodies(), second.bodies());
}

#[test]
fn test_impact_freezes_motion_but_clock_runs() {
    let mut world = head_on_world();
    run_until_impact(&mut world, 2_000).expect("impact");

    let frozen = world.snapshot();
    let tick = world.clock().ticks();
    let report = world.tick();

    assert!(report.advanced);
    assert_eq!(report.tick, tick + 1);
    assert_eq!(report.bodies, frozen);
}
