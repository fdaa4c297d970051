use std::path::PathBuf;

use bestresp::{PlotApp, init_logging, load_config};
use bestresp_core::run_sweep;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bestresp")]
#[command(about = "Grid-search best responses for π(e_i, e_j) = √(e_i + e_j) − e_i²")]
struct Args {
    /// YAML file overriding the e_i grid and e_j sweep ranges
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the log file (default: ~/.bestresp/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the sweep without opening the chart
    #[arg(long)]
    no_plot: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bestresp")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = load_config(args.config.as_deref())?;
    let result = run_sweep(&config, |point| println!("{point}"))?;

    if args.no_plot {
        tracing::info!("Plot skipped");
        return Ok(());
    }

    let mut app = PlotApp::new(result);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
