use anyhow::Result;
use clap::Parser;
use fungi_lib::app;
use fungi_lib::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    fungi_core::init_logging();

    let config = args.config();
    let mut visualizer = app::step_visualizer();
    let report = app::run(&config, &mut visualizer)?;

    println!("{}", report.render(args.report, app::LONG_RUNTIME)?);
    Ok(())
}
