//! Step timing and logging setup.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Steps between periodic progress events.
const PROGRESS_INTERVAL: u64 = 1000;

/// Timing collected over one simulation run.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    steps: u64,
    slowest_step: Duration,
    busy: Duration,
    start_time: Instant,
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RunMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: 0,
            slowest_step: Duration::ZERO,
            busy: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed step with its duration.
    pub fn record_step(&mut self, duration: Duration, cells: usize) {
        self.steps += 1;
        self.busy += duration;
        self.slowest_step = self.slowest_step.max(duration);

        if self.steps % PROGRESS_INTERVAL == 0 {
            tracing::info!(
                steps = self.steps,
                cells = cells,
                step_us = duration.as_micros() as u64,
                "Simulation progress"
            );
        }
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn slowest_step(&self) -> Duration {
        self.slowest_step
    }

    /// Mean step duration, zero before the first step.
    #[must_use]
    pub fn mean_step(&self) -> Duration {
        match u32::try_from(self.steps) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.busy / n,
            Err(_) => Duration::from_secs_f64(self.busy.as_secs_f64() / self.steps as f64),
        }
    }

    /// Elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber.
///
/// Events go to stderr so stdout carries only the run result. The filter
/// comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = RunMetrics::new();
        assert_eq!(metrics.steps(), 0);
        assert_eq!(metrics.mean_step(), Duration::ZERO);
    }

    #[test]
    fn test_record_step() {
        let mut metrics = RunMetrics::new();
        metrics.record_step(Duration::from_millis(4), 100);
        metrics.record_step(Duration::from_millis(2), 100);
        assert_eq!(metrics.steps(), 2);
        assert_eq!(metrics.slowest_step(), Duration::from_millis(4));
        assert_eq!(metrics.mean_step(), Duration::from_millis(3));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
    }
}
