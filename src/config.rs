//! Physical constants, canonical body data, and policy thresholds for the simulator.

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
pub const G: f64 = 6.67430e-11;

/// Astronomical unit in meters.
pub const AU: f64 = 1.496e11;

/// Seconds in one day.
pub const DAY: f64 = 86_400.0;

/// Default integration timestep (0.1 simulated days, in seconds).
pub const DEFAULT_TIME_STEP: f64 = 0.1 * DAY;

/// Mean Earth–Moon distance in meters.
pub const MOON_DISTANCE: f64 = 384_400.0 * 1000.0;

pub const SUN_MASS: f64 = 1.989e30;
pub const EARTH_MASS: f64 = 5.972e24;
pub const MOON_MASS: f64 = 7.347e22;

/// Earth's heliocentric orbital speed (m/s).
pub const EARTH_ORBITAL_SPEED: f64 = 29.78e3;

/// Display-scaled radii (in AU) used for collision thresholds.
pub const SUN_RADIUS_AU: f64 = 0.25;
pub const EARTH_RADIUS_AU: f64 = 0.12;
pub const MOON_RADIUS_AU: f64 = 0.055;
pub const ASTEROID_RADIUS_AU: f64 = 0.06;

/// Canonical body names.
pub const SUN_NAME: &str = "Sun";
pub const EARTH_NAME: &str = "Earth";
pub const MOON_NAME: &str = "Moon";
pub const ASTEROID_NAME: &str = "Asteroid";

/// Planet–asteroid distance (AU) below which proximity is reported as danger.
pub const DANGER_DISTANCE_AU: f64 = 0.001;

/// Planet–asteroid distance (AU) below which proximity is reported as close.
pub const CLOSE_DISTANCE_AU: f64 = 0.2;

/// Effective energy (J) at which an impact becomes medium.
pub const MEDIUM_IMPACT_ENERGY: f64 = 1e15;

/// Effective energy (J) at which an impact becomes large.
pub const LARGE_IMPACT_ENERGY: f64 = 1e18;

/// Exponent divisor of the damage-radius scaling law.
pub const DAMAGE_RADIUS_EXPONENT: f64 = 3.85;

/// Planetary-scale ceiling on the damage radius (km).
pub const MAX_DAMAGE_RADIUS_KM: f64 = 20_000.0;

/// Risk zone fractions of the damage radius: high, medium, low.
pub const RISK_ZONE_FRACTIONS: [f64; 3] = [0.3, 0.6, 1.0];

/// Bulk density (kg/m³) used to derive asteroid mass from its diameter.
pub const DEFAULT_ASTEROID_DENSITY: f64 = 2000.0;

/// Fallbacks for malformed asteroid input, in the units of the raw input.
pub const DEFAULT_ASTEROID_MASS: f64 = 1e15;
pub const DEFAULT_ASTEROID_POSITION_AU: [f64; 3] = [2.0, 0.0, 0.0];
pub const DEFAULT_ASTEROID_VELOCITY_KMS: [f64; 3] = [0.0, 21.0, 0.0];

/// Fallbacks for malformed impact site input.
pub const DEFAULT_IMPACT_LATITUDE: f64 = 50.45;
pub const DEFAULT_IMPACT_LONGITUDE: f64 = 30.52;
pub const DEFAULT_ENTRY_ANGLE_DEG: f64 = 45.0;

/// Wall-clock budget for a single tick (milliseconds).
pub const TICK_BUDGET_MS: f32 = 4.0;
