//! Double-buffered step loop.
//!
//! Every step reads only from `current` and writes only to `next`, then
//! copies the interior of `next` back. Updating in place would let cells
//! already advanced this step feed their neighbors' YOUNG checks.

use crate::census::Census;
use crate::config::SimulationConfig;
use crate::error::Result as CoreResult;
use crate::grid::Grid;
use crate::metrics::RunMetrics;
use crate::neighborhood::has_young_neighbor;
use crate::rng::{SeededSource, UniformSource};
use crate::transition::{initial_state, TransitionLogic};
use anyhow::Result;
use fungi_data::CellState;
use std::time::Instant;

/// Receives the wrapped grid at the start of every step, before evaluation.
pub trait Visualizer {
    fn show(&mut self, step: u64, grid: &Grid) -> Result<()>;
}

impl<V: Visualizer + ?Sized> Visualizer for &mut V {
    fn show(&mut self, step: u64, grid: &Grid) -> Result<()> {
        (**self).show(step, grid)
    }
}

impl<V: Visualizer + ?Sized> Visualizer for Box<V> {
    fn show(&mut self, step: u64, grid: &Grid) -> Result<()> {
        (**self).show(step, grid)
    }
}

/// Visualizer that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Visualizer for Headless {
    #[inline]
    fn show(&mut self, _step: u64, _grid: &Grid) -> Result<()> {
        Ok(())
    }
}

pub struct Simulation<S: UniformSource> {
    current: Grid,
    next: Grid,
    rng: S,
    step: u64,
    metrics: RunMetrics,
}

impl Simulation<SeededSource> {
    /// Validates `config` and builds a randomly seeded run from it.
    pub fn from_config(config: &SimulationConfig) -> CoreResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SeededSource::new(seed),
            None => SeededSource::from_random_seed(),
        };
        Self::new(config.rows, config.columns, rng)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<S: UniformSource> Simulation<S> {
    /// Allocates both grids and scatters spores over `current`,
    /// one draw per interior cell in row-major order.
    pub fn new(rows: usize, columns: usize, mut rng: S) -> CoreResult<Self> {
        let mut current = Grid::new(rows, columns)?;
        let next = Grid::new(rows, columns)?;

        for r in 1..=rows {
            for cell in current.interior_row_mut(r) {
                *cell = initial_state(rng.next_uniform());
            }
        }

        Ok(Self {
            current,
            next,
            rng,
            step: 0,
            metrics: RunMetrics::new(),
        })
    }

    /// Starts from a prepared grid without consuming any draws.
    pub fn from_grid(current: Grid, rng: S) -> CoreResult<Self> {
        let next = Grid::new(current.rows(), current.columns())?;
        Ok(Self {
            current,
            next,
            rng,
            step: 0,
            metrics: RunMetrics::new(),
        })
    }

    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn rng(&self) -> &S {
        &self.rng
    }

    /// Steps executed so far.
    #[inline]
    pub fn steps_executed(&self) -> u64 {
        self.step
    }

    #[inline]
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    pub fn census(&self) -> Census {
        Census::of(&self.current)
    }

    /// Runs steps `0..=time_steps`, i.e. `time_steps + 1` steps.
    pub fn run<V: Visualizer + ?Sized>(
        &mut self,
        time_steps: u64,
        visualizer: &mut V,
    ) -> Result<()> {
        tracing::info!(
            rows = self.current.rows(),
            columns = self.current.columns(),
            time_steps = time_steps,
            "Simulation started"
        );

        for _ in 0..=time_steps {
            self.step(&mut *visualizer)?;
        }

        tracing::info!(
            steps = self.step,
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            mean_step_us = self.metrics.mean_step().as_micros() as u64,
            slowest_step_us = self.metrics.slowest_step().as_micros() as u64,
            "Simulation finished"
        );
        Ok(())
    }

    /// One full step: wrap, show, evaluate into `next`, adopt `next`.
    pub fn step<V: Visualizer + ?Sized>(&mut self, visualizer: &mut V) -> Result<()> {
        let started = Instant::now();

        self.current.wrap_borders();
        visualizer.show(self.step, &self.current)?;
        self.evaluate();
        self.current.copy_interior_from(&self.next);

        if tracing::enabled!(tracing::Level::DEBUG) {
            let census = self.census();
            tracing::debug!(
                step = self.step,
                spores = census.count(CellState::Spore),
                living = census.living(),
                mushrooms = census.count(CellState::Mushrooms),
                depleted = census.count(CellState::Depleted),
                "Step complete"
            );
        }

        self.step += 1;
        self.metrics.record_step(started.elapsed(), self.current.cell_count());
        Ok(())
    }

    fn evaluate(&mut self) {
        let Self {
            current, next, rng, ..
        } = self;

        for r in 1..=current.rows() {
            for c in 1..=current.columns() {
                let state = current.get(r, c);
                let young = state == CellState::Empty && has_young_neighbor(current, r, c);
                next.set(r, c, state.next_state(young, &mut *rng));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ReplaySource;
    use anyhow::bail;

    struct Recorder {
        shown: Vec<(u64, bool)>,
    }

    impl Visualizer for Recorder {
        fn show(&mut self, step: u64, grid: &Grid) -> Result<()> {
            self.shown.push((step, grid.is_wrapped()));
            Ok(())
        }
    }

    struct FailAt(u64);

    impl Visualizer for FailAt {
        fn show(&mut self, step: u64, _grid: &Grid) -> Result<()> {
            if step == self.0 {
                bail!("display closed");
            }
            Ok(())
        }
    }

    #[test]
    fn test_initialization_draws_once_per_cell() {
        let sim = Simulation::new(3, 4, ReplaySource::constant(0.5)).unwrap();
        assert_eq!(sim.rng().consumed(), 12);
        assert_eq!(sim.census().count(CellState::Empty), 12);
    }

    #[test]
    fn test_run_executes_inclusive_step_count() {
        let mut sim = Simulation::new(2, 2, ReplaySource::constant(0.9)).unwrap();
        let mut recorder = Recorder { shown: Vec::new() };
        sim.run(3, &mut recorder).unwrap();

        assert_eq!(sim.steps_executed(), 4);
        assert_eq!(sim.metrics().steps(), 4);
        assert_eq!(
            recorder.shown,
            vec![(0, true), (1, true), (2, true), (3, true)]
        );
    }

    #[test]
    fn test_run_tracks_slowest_step() {
        let mut sim = Simulation::new(8, 8, ReplaySource::new([0.0005, 0.2, 0.9])).unwrap();
        sim.run(5, &mut Headless).unwrap();

        let metrics = sim.metrics();
        assert_eq!(metrics.steps(), 6);
        assert!(metrics.slowest_step() >= metrics.mean_step());
    }

    #[test]
    fn test_empty_grid_consumes_no_step_draws() {
        let mut sim = Simulation::new(5, 5, ReplaySource::constant(0.9)).unwrap();
        sim.run(10, &mut Headless).unwrap();
        assert_eq!(sim.rng().consumed(), 25);
        assert_eq!(sim.census().count(CellState::Empty), 25);
    }

    #[test]
    fn test_visualizer_error_stops_run() {
        let mut sim = Simulation::new(2, 2, ReplaySource::constant(0.9)).unwrap();
        let err = sim.run(5, &mut FailAt(2)).unwrap_err();
        assert_eq!(err.to_string(), "display closed");
        assert_eq!(sim.steps_executed(), 2);
    }

    #[test]
    fn test_updates_read_from_snapshot() {
        // A row of YOUNG cells must not let freshly colonized cells
        // colonize their own neighbors within the same step.
        let mut grid = Grid::new(1, 7).unwrap();
        grid.set(1, 1, CellState::Young);
        let mut sim = Simulation::from_grid(grid, ReplaySource::constant(0.0)).unwrap();
        sim.step(&mut Headless).unwrap();

        let row: Vec<_> = sim.current().interior_row(1).to_vec();
        assert_eq!(
            row,
            vec![
                CellState::Maturing,
                CellState::Young,
                CellState::Empty,
                CellState::Empty,
                CellState::Empty,
                CellState::Empty,
                CellState::Young,
            ]
        );
    }

    #[test]
    fn test_from_config_is_reproducible() {
        let config = SimulationConfig::new(20, 20, 30).with_seed(99);
        let mut a = Simulation::from_config(&config).unwrap();
        let mut b = Simulation::from_config(&config).unwrap();
        a.run(config.time_steps, &mut Headless).unwrap();
        b.run(config.time_steps, &mut Headless).unwrap();

        assert_eq!(a.seed(), 99);
        assert_eq!(a.current(), b.current());
        assert_eq!(a.rng().draws(), b.rng().draws());
    }

    #[test]
    fn test_from_config_rejects_zero_rows() {
        let config = SimulationConfig::new(0, 5, 5);
        assert!(Simulation::from_config(&config).is_err());
    }
}
