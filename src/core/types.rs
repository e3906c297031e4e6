use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::dynamics::integrator::IntegrationMode;

/// Role a body plays in the simulated system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Asteroid,
}

/// Per-kind behaviour flags consulted by the integrator, the collision detector, and renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Held in place while the system warms up.
    pub pinned_during_warm_up: bool,
    /// Takes part in gravity before an asteroid is introduced.
    pub gravitates_during_warm_up: bool,
    /// Can be struck by the impactor.
    pub collision_target: bool,
    /// Is the body whose collision triggers an impact.
    pub impactor: bool,
    /// Rendered with a glow halo.
    pub glow: bool,
    /// Rendered with an atmosphere shell.
    pub atmosphere: bool,
}

impl BodyKind {
    pub const fn capabilities(self) -> Capabilities {
        match self {
            BodyKind::Star => Capabilities {
                pinned_during_warm_up: true,
                gravitates_during_warm_up: true,
                collision_target: false,
                impactor: false,
                glow: true,
                atmosphere: false,
            },
            BodyKind::Planet => Capabilities {
                pinned_during_warm_up: false,
                gravitates_during_warm_up: true,
                collision_target: true,
                impactor: false,
                glow: false,
                atmosphere: true,
            },
            BodyKind::Moon => Capabilities {
                pinned_during_warm_up: false,
                gravitates_during_warm_up: true,
                collision_target: false,
                impactor: false,
                glow: false,
                atmosphere: false,
            },
            BodyKind::Asteroid => Capabilities {
                pinned_during_warm_up: false,
                gravitates_during_warm_up: false,
                collision_target: false,
                impactor: true,
                glow: false,
                atmosphere: false,
            },
        }
    }

    /// Whether a body of this kind is integrated under `mode`.
    pub fn is_integrated_in(self, mode: IntegrationMode) -> bool {
        match mode {
            IntegrationMode::WarmUp => !self.capabilities().pinned_during_warm_up,
            IntegrationMode::Active => true,
        }
    }

    /// Whether a body of this kind contributes to gravity under `mode`.
    pub fn gravitates_in(self, mode: IntegrationMode) -> bool {
        match mode {
            IntegrationMode::WarmUp => self.capabilities().gravitates_during_warm_up,
            IntegrationMode::Active => true,
        }
    }
}

/// Read-only view of a body handed to renderers after every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub name: String,
    pub kind: BodyKind,
    pub position: DVec3,
    pub velocity: DVec3,
    pub radius: f64,
    pub capabilities: Capabilities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_is_only_pinned_during_warm_up() {
        assert!(!BodyKind::Star.is_integrated_in(IntegrationMode::WarmUp));
        assert!(BodyKind::Star.is_integrated_in(IntegrationMode::Active));
        assert!(BodyKind::Planet.is_integrated_in(IntegrationMode::WarmUp));
    }

    #[test]
    fn asteroid_is_inert_until_active() {
        assert!(!BodyKind::Asteroid.gravitates_in(IntegrationMode::WarmUp));
        assert!(BodyKind::Asteroid.gravitates_in(IntegrationMode::Active));
        assert!(BodyKind::Moon.gravitates_in(IntegrationMode::WarmUp));
    }
}
