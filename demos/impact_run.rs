use asteroid_impact::*;

fn main() {
    let preset = std::env::args()
        .nth(1)
        .and_then(|name| {
            QuickPreset::ALL
                .into_iter()
                .find(|p| p.name().eq_ignore_ascii_case(&name))
        })
        .unwrap_or(QuickPreset::Impact);

    let mut world = SimulationWorld::default();
    world.set_map_generator(RecordingMapGenerator::new());

    // Let the planet and moon settle before the asteroid arrives.
    for _ in 0..30 {
        world.tick();
    }

    let (params, errors) = AsteroidInput::from_preset(preset).resolve();
    for error in &errors {
        eprintln!("input: {error}");
    }
    if let Err(error) = world.inject_from_params(&params) {
        eprintln!("injection failed: {error}");
        return;
    }
    println!("Injected '{}' preset", preset.name());

    for _ in 0..20_000 {
        let report = world.tick();
        if report.tick % 500 == 0 {
            let telemetry = world.telemetry();
            println!(
                "day {:>7.1}: asteroid-planet {:?} AU ({:?})",
                telemetry.elapsed_days,
                telemetry.asteroid_planet_distance_au,
                telemetry.proximity.map(|p| p.label()),
            );
        }

        if let Some(impact) = report.impact {
            let assessment = &impact.assessment;
            println!(
                "Impact on day {:.1} at {:.2} km/s",
                report.elapsed_seconds / config::DAY,
                impact.event.relative_speed / 1000.0
            );
            println!(
                "  {:?}: {:.3e} J effective, damage radius {:.0} km",
                assessment.category, assessment.effective_energy_j, assessment.damage_radius_km
            );
            for zone in &assessment.zones {
                println!("  {}: {:.0} km", zone.level.label(), zone.radius_km);
            }
            println!("  {}", assessment.consequences());
            match impact.map {
                Ok(artifact) => println!("  map: {:?}", artifact.location),
                Err(error) => println!("  map failed: {error}"),
            }
            return;
        }
    }

    println!("No impact after {} ticks", world.clock().ticks());
}
