//! Impact energy model: severity classification and risk-zone geometry.

pub mod classifier;

pub use classifier::{
    classify_impact, damage_radius_km, ImpactAssessment, ImpactCategory, RiskLevel, RiskZone,
};
