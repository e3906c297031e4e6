use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{
    DAMAGE_RADIUS_EXPONENT, DEFAULT_ENTRY_ANGLE_DEG, LARGE_IMPACT_ENERGY, MAX_DAMAGE_RADIUS_KM,
    MEDIUM_IMPACT_ENERGY, RISK_ZONE_FRACTIONS,
};

/// Severity class of an impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactCategory {
    Small,
    Medium,
    Large,
}

impl ImpactCategory {
    /// Thresholds are inclusive on the upper class: exactly 1e15 J is medium.
    pub fn from_effective_energy(effective_energy: f64) -> Self {
        if effective_energy < MEDIUM_IMPACT_ENERGY {
            ImpactCategory::Small
        } else if effective_energy < LARGE_IMPACT_ENERGY {
            ImpactCategory::Medium
        } else {
            ImpactCategory::Large
        }
    }

    pub fn scale_factor(&self) -> f64 {
        match self {
            ImpactCategory::Small => 3.0,
            ImpactCategory::Medium => 8.0,
            ImpactCategory::Large => 20.0,
        }
    }

    pub fn consequences(&self) -> &'static str {
        match self {
            ImpactCategory::Small => "Local damage, minor atmospheric effects.",
            ImpactCategory::Medium => "Significant destruction, strong shockwave.",
            ImpactCategory::Large => "Global consequences, significant climate impact.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High-risk zone",
            RiskLevel::Medium => "Medium-risk zone",
            RiskLevel::Low => "Low-risk zone",
        }
    }
}

/// Concentric ring around the impact point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskZone {
    pub level: RiskLevel,
    pub radius_km: f64,
}

/// Result of [`classify_impact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub category: ImpactCategory,
    pub kinetic_energy_j: f64,
    pub effective_energy_j: f64,
    pub damage_radius_km: f64,
    /// Ordered innermost first: high, medium, low.
    pub zones: [RiskZone; 3],
    /// Zoom level a map view should open at.
    pub suggested_map_zoom: u8,
}

impl ImpactAssessment {
    pub fn consequences(&self) -> &'static str {
        self.category.consequences()
    }
}

/// Damage radius (km) for an effective energy and category, capped at planetary scale.
pub fn damage_radius_km(effective_energy: f64, category: ImpactCategory) -> f64 {
    let radius =
        effective_energy.powf(1.0 / DAMAGE_RADIUS_EXPONENT) * category.scale_factor() / 1000.0;
    radius.min(MAX_DAMAGE_RADIUS_KM)
}

/// Classifies an impact from impactor mass, speed at contact, and entry angle.
///
/// Pure: identical inputs always give identical assessments. Malformed inputs are
/// replaced (negative or non-finite mass and speed by zero, an angle outside 0–180° by 45°).
/// Angles past 90° measure from the other horizon and keep a non-negative sine.
pub fn classify_impact(mass_kg: f64, speed_mps: f64, angle_deg: f64) -> ImpactAssessment {
    let mass = non_negative_or_zero("mass", mass_kg);
    let speed = non_negative_or_zero("speed", speed_mps);
    let angle = if angle_deg.is_finite() && (0.0..=180.0).contains(&angle_deg) {
        angle_deg
    } else {
        warn!("entry angle {angle_deg} out of range, using {DEFAULT_ENTRY_ANGLE_DEG}");
        DEFAULT_ENTRY_ANGLE_DEG
    };

    let kinetic_energy = 0.5 * mass * speed * speed;
    let effective_energy = kinetic_energy * angle.to_radians().sin();
    let category = ImpactCategory::from_effective_energy(effective_energy);
    let damage_radius = damage_radius_km(effective_energy, category);

    let levels = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];
    let zones = std::array::from_fn(|i| RiskZone {
        level: levels[i],
        radius_km: damage_radius * RISK_ZONE_FRACTIONS[i],
    });

    let suggested_map_zoom = if damage_radius < 200.0 {
        6
    } else if damage_radius < 800.0 {
        4
    } else {
        3
    };

    ImpactAssessment {
        category,
        kinetic_energy_j: kinetic_energy,
        effective_energy_j: effective_energy,
        damage_radius_km: damage_radius,
        zones,
        suggested_map_zoom,
    }
}

fn non_negative_or_zero(field: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("impact {field} {value} is invalid, using 0");
        0.0
    }
}
