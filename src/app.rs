//! Run orchestration: build the simulation, drive it, time it, report.

use anyhow::{Context, Result};
use fungi_core::{Census, Simulation, SimulationConfig, Visualizer};
use serde::Serialize;
use std::time::Instant;

use crate::cli::ReportFormat;

/// Whether this build prints the long runtime line.
pub const LONG_RUNTIME: bool = cfg!(feature = "debug");

/// Outcome of one complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub rows: usize,
    pub columns: usize,
    pub time_steps: u64,
    pub steps_executed: u64,
    pub seed: u64,
    pub elapsed_seconds: f64,
    pub census: Census,
}

impl RunReport {
    pub fn render(&self, format: ReportFormat, long_runtime: bool) -> Result<String> {
        Ok(match format {
            ReportFormat::Json => serde_json::to_string(self)?,
            ReportFormat::Plain if long_runtime => {
                format!("\nruntime: {:.6} seconds", self.elapsed_seconds)
            }
            ReportFormat::Plain => format!("{:.6}", self.elapsed_seconds),
        })
    }
}

/// Runs the whole simulation described by `config`.
///
/// The clock covers grid allocation, spore seeding and every step.
pub fn run<V: Visualizer + ?Sized>(
    config: &SimulationConfig,
    visualizer: &mut V,
) -> Result<RunReport> {
    let started = Instant::now();

    let mut sim = Simulation::from_config(config).context("Failed to set up the grids")?;
    tracing::info!(
        rows = config.rows,
        columns = config.columns,
        time_steps = config.time_steps,
        total_steps = config.total_steps(),
        seed = sim.seed(),
        "Run configured"
    );

    sim.run(config.time_steps, visualizer)
        .context("Simulation aborted")?;
    let elapsed = started.elapsed();

    Ok(RunReport {
        rows: config.rows,
        columns: config.columns,
        time_steps: config.time_steps,
        steps_executed: sim.steps_executed(),
        seed: sim.seed(),
        elapsed_seconds: elapsed.as_secs_f64(),
        census: sim.census(),
    })
}

/// Per-step grid display selected at build time.
#[cfg(feature = "color")]
pub fn step_visualizer() -> Box<dyn Visualizer> {
    Box::new(fungi_render::ColorView::new(std::io::BufWriter::new(
        std::io::stdout(),
    )))
}

/// Per-step grid display selected at build time.
#[cfg(all(feature = "debug", not(feature = "color")))]
pub fn step_visualizer() -> Box<dyn Visualizer> {
    Box::new(fungi_render::NumberView::new(std::io::BufWriter::new(
        std::io::stdout(),
    )))
}

/// Per-step grid display selected at build time.
#[cfg(not(feature = "debug"))]
pub fn step_visualizer() -> Box<dyn Visualizer> {
    Box::new(fungi_core::Headless)
}
