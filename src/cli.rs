use clap::Parser;
use fungi_core::SimulationConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Simulates the growth of a mushroom network in a patch of grass",
    long_about = None
)]
pub struct Args {
    /// Number of rows in the grid
    #[arg(short = 'r', long, value_name = "ROWS", value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Number of columns in the grid
    #[arg(short = 'c', long, value_name = "COLUMNS", value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: u32,

    /// Number of time steps; steps 0 through TIME_STEPS are simulated
    #[arg(short = 's', long = "time-steps", value_name = "TIME_STEPS", value_parser = clap::value_parser!(u64).range(1..))]
    pub time_steps: u64,

    /// Seed for the random stream (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How to print the result
    #[arg(long, value_enum, default_value = "plain")]
    pub report: ReportFormat,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Elapsed seconds only
    Plain,
    /// Run summary as a JSON object
    Json,
}

impl Args {
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            rows: self.rows as usize,
            columns: self.columns as usize,
            time_steps: self.time_steps,
            seed: self.seed,
        }
    }
}
