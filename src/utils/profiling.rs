use std::time::{Duration, Instant};

/// Stage timings of the most recent tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickProfile {
    pub force_time: Duration,
    pub integrator_time: Duration,
    pub collision_time: Duration,
    pub total_time: Duration,

    pub body_count: usize,
    pub interacting_count: usize,
    /// Set when the tick ran past the configured budget.
    pub over_budget: bool,
}

impl TickProfile {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::debug!(
            "tick: {:.3} ms, bodies {} ({} interacting), forces {:.1}%, integrator {:.1}%, collision {:.1}%",
            self.total_time.as_secs_f32() * 1000.0,
            self.body_count,
            self.interacting_count,
            (self.force_time.as_micros() as f32 / total_us) * 100.0,
            (self.integrator_time.as_micros() as f32 / total_us) * 100.0,
            (self.collision_time.as_micros() as f32 / total_us) * 100.0,
        );
    }
}

/// Adds the lifetime of the guard to `output`.
pub struct StageTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> StageTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for StageTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
