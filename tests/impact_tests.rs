use approx::assert_relative_eq;
use asteroid_impact::*;

#[test]
fn test_category_boundaries_belong_to_the_upper_class() {
    // 0.5 * 2e15 kg * (1 m/s)^2 = 1e15 J, full effective energy at 90 degrees.
    assert_eq!(classify_impact(2e15, 1.0, 90.0).category, ImpactCategory::Medium);
    assert_eq!(classify_impact(1.999e15, 1.0, 90.0).category, ImpactCategory::Small);

    assert_eq!(classify_impact(2e18, 1.0, 90.0).category, ImpactCategory::Large);
    assert_eq!(classify_impact(1.999e18, 1.0, 90.0).category, ImpactCategory::Medium);
}

#[test]
fn test_effective_energy_scales_with_entry_angle() {
    let assessment = classify_impact(1e12, 20_000.0, 30.0);
    assert_relative_eq!(assessment.kinetic_energy_j, 2e20, max_relative = 1e-12);
    assert_relative_eq!(assessment.effective_energy_j, 1e20, max_relative = 1e-9);
}

#[test]
fn test_damage_radius_uses_category_scale_factor() {
    let small = classify_impact(2.0, 1_000.0, 90.0);
    let expected = small.effective_energy_j.powf(1.0 / 3.85) * 3.0 / 1000.0;
    assert_relative_eq!(small.damage_radius_km, expected, max_relative = 1e-12);

    let medium = classify_impact(2e16, 1.0, 90.0);
    assert_eq!(medium.category, ImpactCategory::Medium);
    let expected = 1e16_f64.powf(1.0 / 3.85) * 8.0 / 1000.0;
    assert_relative_eq!(medium.damage_radius_km, expected, max_relative = 1e-9);
}

#[test]
fn test_damage_radius_is_capped() {
    let assessment = classify_impact(5e16, 20_000.0, 45.0);
    assert_eq!(assessment.kinetic_energy_j, 1e25);
    let effective = 1e25 * 45.0_f64.to_radians().sin();
    assert_relative_eq!(assessment.effective_energy_j, effective, max_relative = 1e-12);
    assert_relative_eq!(assessment.effective_energy_j, 7.0711e24, max_relative = 1e-4);
    assert_eq!(assessment.category, ImpactCategory::Large);

    let uncapped = assessment.effective_energy_j.powf(1.0 / 3.85) * 20.0 / 1000.0;
    assert!(uncapped > 20_000.0, "uncapped radius {uncapped} km");
    assert_eq!(assessment.damage_radius_km, 20_000.0);
    assert_eq!(
        impact::damage_radius_km(assessment.effective_energy_j, ImpactCategory::Large),
        20_000.0
    );

    let huge = classify_impact(1e25, 70_000.0, 90.0);
    assert_eq!(huge.damage_radius_km, 20_000.0);
}

#[test]
fn test_risk_zones_are_fixed_fractions_innermost_first() {
    let assessment = classify_impact(5e16, 20_000.0, 45.0);
    let [high, medium, low] = assessment.zones;

    assert_eq!(high.level, RiskLevel::High);
    assert_relative_eq!(high.radius_km, 6_000.0, max_relative = 1e-12);
    assert_eq!(medium.level, RiskLevel::Medium);
    assert_relative_eq!(medium.radius_km, 12_000.0, max_relative = 1e-12);
    assert_eq!(low.level, RiskLevel::Low);
    assert_eq!(low.radius_km, 20_000.0);
}

#[test]
fn test_malformed_inputs_are_substituted() {
    let negative = classify_impact(-5.0, 1_000.0, 45.0);
    assert_eq!(negative.kinetic_energy_j, 0.0);
    assert_eq!(negative.category, ImpactCategory::Small);

    let nan_speed = classify_impact(1e12, f64::NAN, 45.0);
    assert_eq!(nan_speed.kinetic_energy_j, 0.0);

    let default_angle = classify_impact(1e12, 1_000.0, 45.0);
    assert_eq!(classify_impact(1e12, 1_000.0, -10.0), default_angle);
    assert_eq!(classify_impact(1e12, 1_000.0, 200.0), default_angle);
    assert_eq!(classify_impact(1e12, 1_000.0, f64::INFINITY), default_angle);
}

#[test]
fn test_obtuse_entry_angles_are_kept() {
    let obtuse = classify_impact(1e12, 1_000.0, 120.0);
    let acute = classify_impact(1e12, 1_000.0, 60.0);
    assert_relative_eq!(
        obtuse.effective_energy_j,
        acute.effective_energy_j,
        max_relative = 1e-12
    );
    assert_ne!(obtuse, classify_impact(1e12, 1_000.0, 45.0));
}

#[test]
fn test_classification_is_pure() {
    let a = classify_impact(3.3e14, 17_250.0, 62.0);
    let b = classify_impact(3.3e14, 17_250.0, 62.0);
    assert_eq!(a, b);
}

#[test]
fn test_consequences_follow_category() {
    assert!(classify_impact(1.0, 1.0, 45.0).consequences().contains("Local"));
    assert!(classify_impact(5e16, 20_000.0, 45.0)
        .consequences()
        .contains("Global"));
}
