//! Command-line configuration shared by the headless and windowed binaries.

use clap::Args;
use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::dimensions::{Dimensions, DimensionsError};
use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_EXPONENT, MandelbrotAlgorithm, MandelbrotAlgorithmError,
};
use crate::core::fractals::mandelbrot::colour_table::PaletteKind;
use crate::core::fractals::mandelbrot::colouring::kinds::ColouringKind;
use crate::core::view::state::{
    DEFAULT_MAX_ITERATIONS, SampleStride, SampleStrideError, ViewState,
};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid window size: {0}")]
    Dimensions(#[from] DimensionsError),
    #[error("invalid sample stride: {0}")]
    SampleStride(#[from] SampleStrideError),
    #[error("invalid fractal settings: {0}")]
    Algorithm(#[from] MandelbrotAlgorithmError),
}

#[derive(Debug, Clone, Args)]
pub struct ExplorerArgs {
    /// Surface width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Initial iteration cap
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Distance between evaluated samples (1 = full resolution, 2 = half)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=2))]
    pub stride: u32,

    /// Factor on the cross term of the imaginary update; 2 renders the Mandelbrot set
    #[arg(short = 'n', long, default_value_t = DEFAULT_EXPONENT, allow_negative_numbers = true)]
    pub exponent: f64,

    /// Colouring strategy
    #[arg(long, value_enum, default_value_t = ColouringKind::default())]
    pub colouring: ColouringKind,

    /// Palette used by histogram colouring
    #[arg(long, value_enum, default_value_t = PaletteKind::default())]
    pub palette: PaletteKind,
}

impl Default for ExplorerArgs {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            iterations: DEFAULT_MAX_ITERATIONS,
            stride: SampleStride::default().pixels(),
            exponent: DEFAULT_EXPONENT,
            colouring: ColouringKind::default(),
            palette: PaletteKind::default(),
        }
    }
}

/// Where a headless render looks.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Real part of the view center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_real: f64,

    /// Imaginary part of the view center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_imag: f64,

    /// Zoom commands to apply before rendering (each narrows the view by e^0.1)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub zoom_steps: i32,
}

impl ViewArgs {
    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_real, self.center_imag)
    }
}

/// Validated startup settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub dimensions: Dimensions,
    pub max_iterations: u32,
    pub sample_stride: SampleStride,
    pub exponent: f64,
    pub colouring: ColouringKind,
    pub palette: PaletteKind,
}

impl TryFrom<&ExplorerArgs> for ExplorerConfig {
    type Error = ConfigError;

    fn try_from(args: &ExplorerArgs) -> Result<Self, Self::Error> {
        let dimensions = Dimensions::new(args.width, args.height)?;
        let sample_stride = SampleStride::try_from(args.stride)?;
        MandelbrotAlgorithm::new(args.iterations, args.exponent)?;

        Ok(Self {
            dimensions,
            max_iterations: args.iterations,
            sample_stride,
            exponent: args.exponent,
            colouring: args.colouring,
            palette: args.palette,
        })
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.max_iterations, self.sample_stride, self.colouring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        explorer: ExplorerArgs,
        #[command(flatten)]
        view: ViewArgs,
    }

    fn parse(args: &[&str]) -> TestCli {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_initial_settings() {
        let cli = parse(&[]);
        let config = ExplorerConfig::try_from(&cli.explorer).unwrap();

        assert_eq!(config.dimensions.width(), 500);
        assert_eq!(config.dimensions.height(), 500);
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.sample_stride, SampleStride::Half);
        assert_eq!(config.exponent, 2.0);
        assert_eq!(cli.view.center(), Complex::ZERO);
        assert_eq!(cli.view.zoom_steps, 0);
    }

    #[test]
    fn default_args_match_parsed_defaults() {
        let cli = parse(&[]);
        let defaults = ExplorerArgs::default();

        assert_eq!(cli.explorer.width, defaults.width);
        assert_eq!(cli.explorer.height, defaults.height);
        assert_eq!(cli.explorer.iterations, defaults.iterations);
        assert_eq!(cli.explorer.stride, defaults.stride);
        assert_eq!(cli.explorer.exponent, defaults.exponent);
        assert_eq!(cli.explorer.colouring, defaults.colouring);
        assert_eq!(cli.explorer.palette, defaults.palette);
    }

    #[test]
    fn parses_every_option() {
        let cli = parse(&[
            "--width",
            "320",
            "--height",
            "200",
            "--iterations",
            "250",
            "--stride",
            "1",
            "--exponent",
            "-3.5",
            "--colouring",
            "histogram-equalized",
            "--palette",
            "extended",
            "--center-real",
            "-0.75",
            "--center-imag",
            "0.1",
            "--zoom-steps",
            "12",
        ]);
        let config = ExplorerConfig::try_from(&cli.explorer).unwrap();

        assert_eq!(config.dimensions, Dimensions::new(320, 200).unwrap());
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.sample_stride, SampleStride::Full);
        assert_eq!(config.exponent, -3.5);
        assert_eq!(config.colouring, ColouringKind::HistogramEqualized);
        assert_eq!(config.palette, PaletteKind::Extended);
        assert_eq!(cli.view.center(), Complex::new(-0.75, 0.1));
        assert_eq!(cli.view.zoom_steps, 12);
    }

    #[test]
    fn stride_outside_one_or_two_is_rejected_by_parser() {
        let result = TestCli::try_parse_from(["test", "--stride", "3"]);

        assert!(result.is_err());
    }

    #[test]
    fn zero_width_is_rejected() {
        let args = ExplorerArgs {
            width: 0,
            ..ExplorerArgs::default()
        };

        assert!(matches!(
            ExplorerConfig::try_from(&args),
            Err(ConfigError::Dimensions(_))
        ));
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let args = ExplorerArgs {
            iterations: 0,
            ..ExplorerArgs::default()
        };

        assert!(matches!(
            ExplorerConfig::try_from(&args),
            Err(ConfigError::Algorithm(
                MandelbrotAlgorithmError::ZeroMaxIterations
            ))
        ));
    }

    #[test]
    fn unsupported_stride_is_rejected() {
        let args = ExplorerArgs {
            stride: 4,
            ..ExplorerArgs::default()
        };

        assert!(matches!(
            ExplorerConfig::try_from(&args),
            Err(ConfigError::SampleStride(SampleStrideError::Unsupported(4)))
        ));
    }

    #[test]
    fn initial_view_uses_configured_settings() {
        let config = ExplorerConfig {
            max_iterations: 900,
            sample_stride: SampleStride::Full,
            colouring: ColouringKind::HistogramEqualized,
            ..ExplorerConfig::try_from(&ExplorerArgs::default()).unwrap()
        };

        let view = config.initial_view();

        assert_eq!(view.max_iterations(), 900);
        assert_eq!(view.sample_stride(), SampleStride::Full);
        assert_eq!(view.colouring(), ColouringKind::HistogramEqualized);
        assert_eq!(view.center(), Complex::ZERO);
    }
}
