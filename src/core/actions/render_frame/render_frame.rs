use thiserror::Error;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::actions::render_frame::ports::pixel_surface::PixelSurface;
use crate::core::actions::render_frame::sample_grid::{SampleGrid, sample_escape_steps};
use crate::core::data::dimensions::{Dimensions, DimensionsError};
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::colour_table::ColourTable;
use crate::core::fractals::mandelbrot::colouring::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colouring::histogram::HistogramColourMap;
use crate::core::fractals::mandelbrot::colouring::kinds::ColouringKind;
use crate::core::fractals::mandelbrot::colouring::normalized_speed::NormalizedSpeedColourMap;
use crate::core::view::state::ViewState;

#[derive(Debug, Error)]
pub enum RenderFrameError {
    #[error("surface error: {0}")]
    Surface(#[from] DimensionsError),
    #[error("viewport error: {0}")]
    Viewport(#[from] ViewportError),
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("sample grid is {grid_width}x{grid_height} but surface is {surface_width}x{surface_height}")]
    SurfaceMismatch {
        grid_width: u32,
        grid_height: u32,
        surface_width: u32,
        surface_height: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    pub samples: usize,
    pub colouring: ColouringKind,
}

/// Renders one complete frame of `view` into `surface`.
///
/// Every pixel of the surface is written exactly once; the surface is never
/// left partially updated by a successful call.
pub fn render_frame<Alg, S>(
    view: &ViewState,
    algorithm: &Alg,
    palette: &ColourTable,
    surface: &mut S,
) -> Result<FrameSummary, RenderFrameError>
where
    Alg: EscapeAlgorithm,
    S: PixelSurface,
{
    let dimensions = Dimensions::new(surface.width(), surface.height())?;
    let viewport = view.viewport()?;
    let grid = sample_escape_steps(
        &viewport,
        dimensions,
        view.sample_stride().pixels(),
        algorithm,
    );
    let max_iterations = algorithm.iteration_cap();

    let samples = match view.colouring() {
        ColouringKind::NormalizedSpeed => {
            let mapper = NormalizedSpeedColourMap::new(max_iterations);
            paint_samples(&grid, &mapper, surface)?
        }
        ColouringKind::HistogramEqualized => {
            let histogram = grid.histogram(max_iterations)?;
            let mapper = HistogramColourMap::new(&histogram, palette);
            paint_samples(&grid, &mapper, surface)?
        }
    };

    Ok(FrameSummary {
        samples,
        colouring: view.colouring(),
    })
}

/// Colours every sample and fills its block, clipped to the surface edges.
///
/// All colours are mapped before the first write, so a mapping failure leaves
/// the surface untouched.
pub fn paint_samples<CMap, S>(
    grid: &SampleGrid,
    mapper: &CMap,
    surface: &mut S,
) -> Result<usize, RenderFrameError>
where
    CMap: ColourMap,
    S: PixelSurface,
{
    let dimensions = grid.dimensions();
    let (width, height) = (surface.width(), surface.height());

    if dimensions.width() != width || dimensions.height() != height {
        return Err(RenderFrameError::SurfaceMismatch {
            grid_width: dimensions.width(),
            grid_height: dimensions.height(),
            surface_width: width,
            surface_height: height,
        });
    }

    let colours = grid
        .steps()
        .iter()
        .map(|&steps| mapper.map(steps))
        .collect::<Result<Vec<_>, _>>()?;
    let stride = grid.stride();

    for ((origin, _), colour) in grid.samples().zip(colours) {
        let block_width = stride.min(width - origin.x);
        let block_height = stride.min(height - origin.y);

        surface.fill_rect(origin.x, origin.y, block_width, block_height, colour);
    }

    Ok(grid.len())
}
