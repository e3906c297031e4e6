mod clock;
mod telemetry;

pub use clock::SimulationClock;
pub use telemetry::Telemetry;

use std::time::Instant;

use glam::DVec3;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    collision::{CollisionDetector, ImpactEvent, Proximity},
    config::{
        ASTEROID_NAME, ASTEROID_RADIUS_AU, AU, DEFAULT_ASTEROID_MASS, EARTH_MASS, EARTH_NAME,
        EARTH_ORBITAL_SPEED, EARTH_RADIUS_AU, MOON_DISTANCE, MOON_MASS, MOON_NAME,
        MOON_RADIUS_AU, SUN_MASS, SUN_NAME, SUN_RADIUS_AU, TICK_BUDGET_MS,
    },
    core::{Body, BodyKind, BodyRegistry, BodySnapshot},
    dynamics::{GravityAccumulator, IntegrationMode, Integrator},
    error::{Result, SimError},
    impact::{classify_impact, ImpactAssessment},
    map::{MapArtifact, MapGenerator, MapRequest, NoopMapGenerator},
    presets::{AsteroidParams, ImpactSite},
    utils::{
        logging::{warn_if_tick_budget_exceeded, ScopedTimer},
        math::circular_orbit_speed,
        profiling::{StageTimer, TickProfile},
    },
};

/// Lifecycle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationState {
    /// Freshly reset; star, planet, and moon warm up without an asteroid.
    Idle,
    /// Asteroid present, full mutual gravity, no collision yet.
    Running,
    /// Collision recorded; motion is frozen until reset.
    Impacted,
}

/// Impact side of a tick report.
#[derive(Debug, Clone)]
pub struct ImpactReport {
    pub event: ImpactEvent,
    pub assessment: ImpactAssessment,
    /// Outcome of the single map-generation call. A failure leaves the impact valid.
    pub map: Result<MapArtifact>,
}

/// Everything an observer needs after one call to [`SimulationWorld::tick`].
#[derive(Debug, Clone)]
pub struct TickReport {
    pub tick: u64,
    pub elapsed_seconds: f64,
    pub state: SimulationState,
    /// False when the tick was skipped because the run is paused.
    pub advanced: bool,
    pub bodies: Vec<BodySnapshot>,
    pub impact: Option<ImpactReport>,
}

/// The star, planet, and moon every run starts from.
pub fn canonical_bodies() -> Vec<Body> {
    let earth_distance = AU;
    let moon_speed = circular_orbit_speed(EARTH_MASS, MOON_DISTANCE);

    let sun = Body::from_constants(SUN_NAME, BodyKind::Star, SUN_MASS, SUN_RADIUS_AU * AU);
    let earth = Body::from_constants(EARTH_NAME, BodyKind::Planet, EARTH_MASS, EARTH_RADIUS_AU * AU)
        .with_position(DVec3::new(earth_distance, 0.0, 0.0))
        .with_velocity(DVec3::new(0.0, EARTH_ORBITAL_SPEED, 0.0));
    let moon = Body::from_constants(MOON_NAME, BodyKind::Moon, MOON_MASS, MOON_RADIUS_AU * AU)
        .with_position(DVec3::new(earth_distance + MOON_DISTANCE, 0.0, 0.0))
        .with_velocity(DVec3::new(0.0, EARTH_ORBITAL_SPEED + moon_speed, 0.0));

    vec![sun, earth, moon]
}

/// Simulation controller: sole owner of the bodies, the clock, and the run state.
pub struct SimulationWorld {
    registry: BodyRegistry,
    accumulator: GravityAccumulator,
    integrator: Integrator,
    detector: CollisionDetector,
    clock: SimulationClock,
    state: SimulationState,
    paused: bool,
    impact_site: ImpactSite,
    impact: Option<(ImpactEvent, ImpactAssessment)>,
    map_created: bool,
    map_generator: Box<dyn MapGenerator>,
    profile: TickProfile,
}

impl Default for SimulationWorld {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TIME_STEP)
    }
}

impl SimulationWorld {
    /// Creates a world in `Idle` with the canonical bodies. Invalid steps use the default.
    pub fn new(time_step: f64) -> Self {
        let integrator = Integrator::new(time_step);
        let clock = SimulationClock::new(integrator.time_step());
        let mut world = Self {
            registry: BodyRegistry::new(),
            accumulator: GravityAccumulator::new(),
            integrator,
            detector: CollisionDetector::new(),
            clock,
            state: SimulationState::Idle,
            paused: false,
            impact_site: ImpactSite::default(),
            impact: None,
            map_created: false,
            map_generator: Box::new(NoopMapGenerator::new()),
            profile: TickProfile::default(),
        };
        world.reset();
        world
    }

    /// Sets the fixed step. Refused while a run is actively ticking.
    pub fn configure(&mut self, time_step: f64) -> Result<()> {
        if self.state == SimulationState::Running && !self.paused {
            warn!("configure({time_step}) refused: run in progress, pause first");
            return Err(SimError::TimeStepLocked);
        }
        self.integrator.set_time_step(time_step);
        self.clock.set_time_step(self.integrator.time_step());
        info!("time step set to {} s", self.integrator.time_step());
        Ok(())
    }

    /// Returns to `Idle` with a fresh star, planet, and moon.
    pub fn reset(&mut self) {
        self.registry.clear();
        for body in canonical_bodies() {
            self.registry.add(body);
        }
        self.clock.reset();
        self.detector.reset();
        self.state = SimulationState::Idle;
        self.paused = false;
        self.impact = None;
        self.map_created = false;
        self.profile.reset();
        info!("simulation reset to idle");
    }

    /// Introduces the asteroid, replacing any existing one, and starts the run.
    ///
    /// Non-physical values fall back to the documented defaults.
    pub fn inject_asteroid(
        &mut self,
        mass_kg: f64,
        position_m: DVec3,
        velocity_mps: DVec3,
        radius_m: f64,
    ) -> Result<()> {
        if self.state == SimulationState::Impacted {
            warn!("inject_asteroid refused: impact already recorded, reset first");
            return Err(SimError::AlreadyImpacted);
        }

        let defaults = AsteroidParams::default();
        let mass = if mass_kg.is_finite() && mass_kg > 0.0 {
            mass_kg
        } else {
            warn!("asteroid mass {mass_kg} is invalid, using {DEFAULT_ASTEROID_MASS}");
            DEFAULT_ASTEROID_MASS
        };
        let position = if position_m.is_finite() {
            position_m
        } else {
            warn!("asteroid position {position_m} is invalid, using default");
            defaults.position_m
        };
        let velocity = if velocity_mps.is_finite() {
            velocity_mps
        } else {
            warn!("asteroid velocity {velocity_mps} is invalid, using default");
            defaults.velocity_mps
        };
        let radius = if radius_m.is_finite() && radius_m > 0.0 {
            radius_m
        } else {
            warn!("asteroid radius {radius_m} is invalid, using default");
            ASTEROID_RADIUS_AU * AU
        };

        let asteroid = Body::new(ASTEROID_NAME, BodyKind::Asteroid, mass, radius)?
            .with_position(position)
            .with_velocity(velocity);
        self.registry.add(asteroid);

        if self.state == SimulationState::Idle {
            info!("asteroid injected, idle -> running");
            self.state = SimulationState::Running;
        }
        Ok(())
    }

    /// Injects an asteroid from resolved parameters and adopts their impact site.
    pub fn inject_from_params(&mut self, params: &AsteroidParams) -> Result<()> {
        self.inject_asteroid(
            params.mass_kg,
            params.position_m,
            params.velocity_mps,
            params.radius_m,
        )?;
        self.impact_site = params.site;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances exactly one fixed step.
    pub fn tick(&mut self) -> TickReport {
        let _timer = ScopedTimer::new("world::tick");
        if self.paused {
            return self.report(false, None);
        }

        let started = Instant::now();
        let mut profile = TickProfile {
            body_count: self.registry.len(),
            ..TickProfile::default()
        };

        if self.state != SimulationState::Impacted {
            self.advance_bodies(&mut profile);
        }
        self.clock.advance();

        let impact = if self.state == SimulationState::Running {
            let event = {
                let _stage = StageTimer::new(&mut profile.collision_time);
                self.detector.detect(
                    self.registry.all(),
                    self.impact_site.entry_angle_deg,
                    self.clock.ticks(),
                )
            };
            event.map(|event| self.record_impact(event))
        } else {
            None
        };

        profile.total_time = started.elapsed();
        profile.over_budget = warn_if_tick_budget_exceeded(profile.total_time, TICK_BUDGET_MS);
        profile.report();
        self.profile = profile;

        self.report(true, impact)
    }

    fn advance_bodies(&mut self, profile: &mut TickProfile) {
        let mode = self.mode();
        let mut interacting: Vec<&mut Body> = self
            .registry
            .iter_mut()
            .filter(|body| body.kind.gravitates_in(mode))
            .collect();
        profile.interacting_count = interacting.len();

        {
            let _stage = StageTimer::new(&mut profile.force_time);
            self.accumulator.accumulate(&mut interacting);
        }
        {
            let _stage = StageTimer::new(&mut profile.integrator_time);
            self.integrator.step(&mut interacting, mode);
        }
    }

    fn record_impact(&mut self, event: ImpactEvent) -> ImpactReport {
        let assessment = classify_impact(
            event.impactor_mass,
            event.relative_speed,
            event.entry_angle_deg,
        );
        info!(
            "impact at tick {}: {:.3e} m/s, {:?}, effective energy {:.2e} J, radius {:.1} km",
            event.tick,
            event.relative_speed,
            assessment.category,
            assessment.effective_energy_j,
            assessment.damage_radius_km
        );
        self.state = SimulationState::Impacted;

        let request = MapRequest {
            site: self.impact_site,
            event: event.clone(),
            assessment: assessment.clone(),
        };
        let map = self.map_generator.generate(&request);
        match &map {
            Ok(artifact) => {
                self.map_created = true;
                info!("impact map produced by {}", artifact.generator);
            }
            Err(err) => warn!("{err}"),
        }

        self.impact = Some((event.clone(), assessment.clone()));
        ImpactReport {
            event,
            assessment,
            map,
        }
    }

    fn report(&self, advanced: bool, impact: Option<ImpactReport>) -> TickReport {
        TickReport {
            tick: self.clock.ticks(),
            elapsed_seconds: self.clock.elapsed_seconds(),
            state: self.state,
            advanced,
            bodies: self.snapshot(),
            impact,
        }
    }

    /// Current planet–asteroid distance and warning level, if both exist.
    pub fn query_proximity(&self) -> Option<Proximity> {
        self.detector.proximity(self.registry.all())
    }

    pub fn telemetry(&self) -> Telemetry {
        let planet = self.registry.first_of_kind(BodyKind::Planet);
        let distance_from_planet = |kind: BodyKind| {
            let other = self.registry.first_of_kind(kind)?;
            planet.map(|p| p.distance_to(other) / AU)
        };

        Telemetry {
            tick: self.clock.ticks(),
            elapsed_days: self.clock.elapsed_days(),
            state: self.state,
            mode: self.mode(),
            paused: self.paused,
            planet_star_distance_au: distance_from_planet(BodyKind::Star),
            planet_moon_distance_au: distance_from_planet(BodyKind::Moon),
            asteroid_planet_distance_au: self.query_proximity().map(|p| p.distance_au),
            proximity: self.query_proximity().map(|p| p.level),
            map_created: self.map_created,
        }
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.registry.iter().map(Body::snapshot).collect()
    }

    pub fn mode(&self) -> IntegrationMode {
        match self.state {
            SimulationState::Idle => IntegrationMode::WarmUp,
            SimulationState::Running | SimulationState::Impacted => IntegrationMode::Active,
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn bodies(&self) -> &[Body] {
        self.registry.all()
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.registry.get(name)
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn time_step(&self) -> f64 {
        self.integrator.time_step()
    }

    pub fn impact_event(&self) -> Option<&ImpactEvent> {
        self.impact.as_ref().map(|(event, _)| event)
    }

    pub fn impact_assessment(&self) -> Option<&ImpactAssessment> {
        self.impact.as_ref().map(|(_, assessment)| assessment)
    }

    pub fn impact_site(&self) -> ImpactSite {
        self.impact_site
    }

    pub fn set_impact_site(&mut self, site: ImpactSite) {
        self.impact_site = site;
    }

    pub fn set_map_generator<M>(&mut self, generator: M)
    where
        M: MapGenerator + 'static,
    {
        self.map_generator = Box::new(generator);
    }

    pub fn map_generator_name(&self) -> &str {
        self.map_generator.name()
    }

    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.accumulator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.accumulator.parallel()
    }

    pub fn last_profile(&self) -> &TickProfile {
        &self.profile
    }
}
