use crate::core::actions::render_frame::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colouring::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colouring::histogram::HistogramAccumulator;

/// Escape step counts for every sample of one frame, row-major.
///
/// Sample `(column, row)` sits at pixel `(column * stride, row * stride)` and
/// stands for the `stride x stride` block starting there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    dimensions: Dimensions,
    stride: u32,
    columns: u32,
    steps: Vec<u32>,
}

impl SampleGrid {
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[must_use]
    pub fn steps(&self) -> &[u32] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Top-left pixel of each sample's block with its step count.
    pub fn samples(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        let columns = self.columns as usize;
        let stride = self.stride;

        self.steps.iter().enumerate().map(move |(i, &steps)| {
            let origin = Point {
                x: (i % columns) as u32 * stride,
                y: (i / columns) as u32 * stride,
            };
            (origin, steps)
        })
    }

    pub fn histogram(&self, max_iterations: u32) -> Result<HistogramAccumulator, ColourMapError> {
        let mut histogram = HistogramAccumulator::new(max_iterations);

        for &steps in &self.steps {
            histogram.record(steps)?;
        }

        Ok(histogram)
    }
}

/// Evaluates `algorithm` once per sample of `dimensions` at the given stride.
pub fn sample_escape_steps<Alg: EscapeAlgorithm>(
    viewport: &Viewport,
    dimensions: Dimensions,
    stride: u32,
    algorithm: &Alg,
) -> SampleGrid {
    let stride = stride.max(1);
    let columns = dimensions.width().div_ceil(stride);
    let rows = dimensions.height().div_ceil(stride);

    let steps = (0..rows)
        .flat_map(|row| (0..columns).map(move |column| Point {
            x: column * stride,
            y: row * stride,
        }))
        .map(|pixel| algorithm.escape_steps(viewport.pixel_to_plane(pixel, dimensions)))
        .collect();

    SampleGrid {
        dimensions,
        stride,
        columns,
        steps,
    }
}
