use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::config::ExplorerConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::{
    FrameSummary, RenderFrameError, render_frame,
};
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, MandelbrotAlgorithmError};
use crate::core::fractals::mandelbrot::colour_table::ColourTable;
use crate::core::view::state::ViewState;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Algorithm(#[from] MandelbrotAlgorithmError),
    #[error(transparent)]
    Render(#[from] RenderFrameError),
    #[error("no frame has been rendered yet")]
    NothingRendered,
    #[error("failed to write frame: {0}")]
    Write(#[from] std::io::Error),
}

pub struct HeadlessController<P: FilePresenterPort> {
    presenter: P,
    config: ExplorerConfig,
    view: ViewState,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Self {
        Self {
            presenter,
            view: config.initial_view(),
            config,
            buffer: None,
        }
    }

    /// Moves the view before rendering; zoom steps are clamped to the view limits.
    #[must_use]
    pub fn looking_at(mut self, center: Complex, zoom_steps: i32) -> Self {
        self.view = self.view.looking_at(center, zoom_steps);
        self
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self) -> Result<FrameSummary, HeadlessError> {
        let algorithm = MandelbrotAlgorithm::new(self.view.max_iterations(), self.config.exponent)?;
        let palette = ColourTable::new(self.config.palette);
        let mut buffer = PixelBuffer::new(self.config.dimensions);

        log::info!(
            "Rendering {}x{} at {} (zoom {:.4}, {} iterations, {})",
            self.config.dimensions.width(),
            self.config.dimensions.height(),
            self.view.center(),
            self.view.zoom(),
            self.view.max_iterations(),
            self.view.colouring(),
        );

        let start = Instant::now();
        let summary = render_frame(&self.view, &algorithm, &palette, &mut buffer)?;
        log::info!("Rendered {} samples in {:?}", summary.samples, start.elapsed());

        self.buffer = Some(buffer);

        Ok(summary)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), HeadlessError> {
        let buffer = self.buffer.as_ref().ok_or(HeadlessError::NothingRendered)?;
        let filepath = filepath.as_ref();

        self.presenter.present(buffer, filepath)?;
        log::info!("Wrote {}", filepath.display());

        Ok(())
    }
}
