use crate::config::DAY;

/// Tick counter paired with the fixed step that produced it.
///
/// Changing the step rebases the clock so elapsed time never jumps backwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    ticks: u64,
    time_step: f64,
    segment_start_tick: u64,
    segment_start_seconds: f64,
}

impl SimulationClock {
    pub fn new(time_step: f64) -> Self {
        Self {
            ticks: 0,
            time_step,
            segment_start_tick: 0,
            segment_start_seconds: 0.0,
        }
    }

    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.time_step);
    }

    pub fn set_time_step(&mut self, time_step: f64) {
        self.segment_start_seconds = self.elapsed_seconds();
        self.segment_start_tick = self.ticks;
        self.time_step = time_step;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.segment_start_seconds + (self.ticks - self.segment_start_tick) as f64 * self.time_step
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_seconds() / DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebasing_keeps_elapsed_time_monotonic() {
        let mut clock = SimulationClock::new(10.0);
        clock.advance();
        clock.advance();
        clock.set_time_step(1.0);
        clock.advance();
        assert_eq!(clock.ticks(), 3);
        assert_eq!(clock.elapsed_seconds(), 21.0);

        clock.reset();
        assert_eq!(clock.ticks(), 0);
        assert_eq!(clock.elapsed_seconds(), 0.0);
        assert_eq!(clock.time_step(), 1.0);
    }
}
