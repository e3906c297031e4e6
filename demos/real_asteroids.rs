use asteroid_impact::*;

fn main() {
    for asteroid in real_asteroids() {
        let params = asteroid.params();
        let assessment = classify_impact(
            params.mass_kg,
            params.velocity_mps.length(),
            params.site.entry_angle_deg,
        );
        println!(
            "{:<16} {:>8.2} km  {:>9.2e} kg  threat {:<8} -> {:?}, {:.0} km",
            asteroid.name,
            asteroid.diameter_km,
            asteroid.mass(),
            asteroid.threat_level.color_label(),
            assessment.category,
            assessment.damage_radius_km,
        );
    }
}
