use anyhow::Context;
use clap::Parser;
use mandelbrot_explorer::{ExplorerArgs, ExplorerConfig, run_gui};

/// Explore the Mandelbrot set in a window.
#[derive(Debug, Parser)]
#[command(name = "gui", version, about)]
struct Cli {
    #[command(flatten)]
    explorer: ExplorerArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ExplorerConfig::try_from(&cli.explorer).context("invalid configuration")?;

    run_gui(&config).context("explorer window failed")?;

    Ok(())
}
