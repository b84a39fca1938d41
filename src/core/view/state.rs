use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colouring::kinds::ColouringKind;
use crate::core::view::command::{ViewCommand, ViewUpdate};
use crate::core::view::limits::ViewLimits;

pub const DEFAULT_MAX_ITERATIONS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleStrideError {
    #[error("sample stride must be 1 or 2, got {0}")]
    Unsupported(u32),
}

/// Distance between evaluated samples; each sample fills a `stride x stride` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleStride {
    Full,
    #[default]
    Half,
}

impl SampleStride {
    #[must_use]
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Full => 1,
            Self::Half => 2,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Full => Self::Half,
            Self::Half => Self::Full,
        }
    }
}

impl TryFrom<u32> for SampleStride {
    type Error = SampleStrideError;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        match pixels {
            1 => Ok(Self::Full),
            2 => Ok(Self::Half),
            other => Err(SampleStrideError::Unsupported(other)),
        }
    }
}

/// Everything that decides what the next frame shows. Only changes between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    center: Complex,
    zoom_steps: i32,
    max_iterations: u32,
    sample_stride: SampleStride,
    colouring: ColouringKind,
    initial_max_iterations: u32,
    limits: ViewLimits,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_ITERATIONS,
            SampleStride::default(),
            ColouringKind::default(),
        )
    }
}

impl ViewState {
    /// Starts at the origin with no zoom applied.
    #[must_use]
    pub fn new(max_iterations: u32, sample_stride: SampleStride, colouring: ColouringKind) -> Self {
        let limits = ViewLimits::default();
        let max_iterations = max_iterations.max(1);

        Self {
            center: Complex::ZERO,
            zoom_steps: 0,
            max_iterations,
            sample_stride,
            colouring,
            initial_max_iterations: max_iterations,
            limits,
        }
    }

    /// Moves the view, clamping `zoom_steps` to the zoom limits.
    #[must_use]
    pub fn looking_at(mut self, center: Complex, zoom_steps: i32) -> Self {
        self.center = center;
        self.zoom_steps = self.limits.clamp_zoom_steps(zoom_steps);
        self
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom_steps(&self) -> i32 {
        self.zoom_steps
    }

    /// Magnification relative to the initial view; larger is closer.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        1.0 / self.half_extent()
    }

    #[must_use]
    pub fn half_extent(&self) -> f64 {
        self.limits.half_extent(self.zoom_steps)
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn sample_stride(&self) -> SampleStride {
        self.sample_stride
    }

    #[must_use]
    pub fn colouring(&self) -> ColouringKind {
        self.colouring
    }

    #[must_use]
    pub fn limits(&self) -> ViewLimits {
        self.limits
    }

    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::centered(self.center, self.half_extent())
    }

    pub fn apply(&mut self, command: ViewCommand) -> ViewUpdate {
        let pan = self.half_extent() / 2.0;

        match command {
            ViewCommand::PanUp => self.pan(Complex::new(0.0, -pan)),
            ViewCommand::PanDown => self.pan(Complex::new(0.0, pan)),
            ViewCommand::PanLeft => self.pan(Complex::new(-pan, 0.0)),
            ViewCommand::PanRight => self.pan(Complex::new(pan, 0.0)),
            ViewCommand::ZoomIn => self.zoom_by(1),
            ViewCommand::ZoomOut => self.zoom_by(-1),
            ViewCommand::IncreaseDetail => {
                match self.max_iterations.checked_add(self.limits.detail_step) {
                    Some(max_iterations) => {
                        self.max_iterations = max_iterations;
                        ViewUpdate::Applied
                    }
                    None => {
                        self.max_iterations = u32::MAX;
                        ViewUpdate::Clamped
                    }
                }
            }
            ViewCommand::DecreaseDetail => {
                let lowered = self.max_iterations.saturating_sub(self.limits.detail_step);

                if lowered < self.limits.min_iterations {
                    self.max_iterations = self.limits.min_iterations;
                    ViewUpdate::Clamped
                } else {
                    self.max_iterations = lowered;
                    ViewUpdate::Applied
                }
            }
            ViewCommand::ToggleResolution => {
                self.sample_stride = self.sample_stride.toggled();
                ViewUpdate::Applied
            }
            ViewCommand::CycleColouring => {
                self.colouring = self.colouring.next();
                ViewUpdate::Applied
            }
            ViewCommand::ResetView => {
                self.center = Complex::ZERO;
                self.zoom_steps = 0;
                self.max_iterations = self.initial_max_iterations;
                ViewUpdate::Applied
            }
            ViewCommand::Quit => ViewUpdate::Quit,
        }
    }

    fn pan(&mut self, offset: Complex) -> ViewUpdate {
        self.center = self.center + offset;
        ViewUpdate::Applied
    }

    fn zoom_by(&mut self, delta: i32) -> ViewUpdate {
        let requested = self.zoom_steps.saturating_add(delta);
        self.zoom_steps = self.limits.clamp_zoom_steps(requested);

        if self.zoom_steps == requested {
            ViewUpdate::Applied
        } else {
            ViewUpdate::Clamped
        }
    }
}
