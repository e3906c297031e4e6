use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Trace-level span around one simulation stage. Silent unless trace logging is on.
pub struct ScopedTimer {
    label: &'static str,
    start: Option<Instant>,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        let start = log_enabled!(Level::Trace).then(|| {
            log::trace!("enter {label}");
            Instant::now()
        });
        Self { label, start }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            log::trace!("exit {} after {} µs", self.label, start.elapsed().as_micros());
        }
    }
}

/// Warns when a tick took longer than `budget_ms`. Returns whether it did.
pub fn warn_if_tick_budget_exceeded(duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    let exceeded = elapsed_ms > budget_ms;
    if exceeded {
        warn!("tick took {elapsed_ms:.2} ms, budget is {budget_ms:.2} ms");
    }
    exceeded
}
