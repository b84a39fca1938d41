use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mandelbrot_explorer::{ExplorerArgs, ExplorerConfig, HeadlessController, PpmFilePresenter, ViewArgs};

/// Render one Mandelbrot frame to a PPM image.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot_explorer", version, about)]
struct Cli {
    #[command(flatten)]
    explorer: ExplorerArgs,

    #[command(flatten)]
    view: ViewArgs,

    /// Where to write the image
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ExplorerConfig::try_from(&cli.explorer).context("invalid configuration")?;

    let mut controller = HeadlessController::new(PpmFilePresenter::new(), config)
        .looking_at(cli.view.center(), cli.view.zoom_steps);

    controller.generate().context("failed to render frame")?;
    controller
        .write(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_defaults_to_output_directory() {
        let cli = Cli::try_parse_from(["mandelbrot_explorer"]).unwrap();

        assert_eq!(cli.output, PathBuf::from("output/mandelbrot.ppm"));
    }
}
