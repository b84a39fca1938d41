use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::ExplorerConfig;
use crate::controllers::interactive::data::frame::Frame;
use crate::controllers::interactive::ports::{CommandSource, FramePresenterPort};
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, MandelbrotAlgorithmError};
use crate::core::fractals::mandelbrot::colour_table::ColourTable;
use crate::core::view::command::ViewUpdate;
use crate::core::view::state::ViewState;

#[derive(Debug, Error)]
pub enum ControllerError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Algorithm(#[from] MandelbrotAlgorithmError),
    #[error(transparent)]
    Render(#[from] RenderFrameError),
    #[error("failed to present frame: {0}")]
    Present(#[source] E),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

pub struct InteractiveController {
    view: ViewState,
    palette: ColourTable,
    exponent: f64,
    buffer: PixelBuffer,
    generation: u64,
    dirty: bool,
    last_render: Option<Duration>,
}

impl InteractiveController {
    #[must_use]
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            view: config.initial_view(),
            palette: ColourTable::new(config.palette),
            exponent: config.exponent,
            buffer: PixelBuffer::new(config.dimensions),
            generation: 0,
            dirty: true,
            last_render: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.dirty
    }

    /// Applies every queued command in order. Commands after a quit are dropped.
    pub fn apply_pending<S>(&mut self, source: &mut S) -> LoopControl
    where
        S: CommandSource + ?Sized,
    {
        for command in source.drain_commands() {
            match self.view.apply(command) {
                ViewUpdate::Quit => {
                    log::info!("Quit requested");
                    return LoopControl::Quit;
                }
                ViewUpdate::Clamped => {
                    log::debug!("{command:?} hit a view limit");
                    self.dirty = true;
                }
                ViewUpdate::Applied => {
                    log::debug!(
                        "{command:?}: center {}, zoom {:.4}, {} iterations, stride {}, {}",
                        self.view.center(),
                        self.view.zoom(),
                        self.view.max_iterations(),
                        self.view.sample_stride().pixels(),
                        self.view.colouring(),
                    );
                    self.dirty = true;
                }
            }
        }

        LoopControl::Continue
    }

    /// Renders and presents a frame if the view changed since the last one.
    pub fn render_if_needed<P>(&mut self, presenter: &mut P) -> Result<bool, ControllerError<P::Error>>
    where
        P: FramePresenterPort + ?Sized,
    {
        if !self.dirty {
            return Ok(false);
        }

        self.render_and_present(presenter)?;

        Ok(true)
    }

    pub fn render_and_present<P>(&mut self, presenter: &mut P) -> Result<(), ControllerError<P::Error>>
    where
        P: FramePresenterPort + ?Sized,
    {
        let algorithm = MandelbrotAlgorithm::new(self.view.max_iterations(), self.exponent)?;

        let start = Instant::now();
        let summary = render_frame(&self.view, &algorithm, &self.palette, &mut self.buffer)?;
        let render_duration = start.elapsed();

        self.generation += 1;
        self.last_render = Some(render_duration);

        log::trace!(
            "Frame {} rendered {} samples ({}) in {:?}",
            self.generation,
            summary.samples,
            summary.colouring,
            render_duration,
        );

        presenter
            .present(&Frame {
                generation: self.generation,
                pixel_buffer: &self.buffer,
                view: &self.view,
                render_duration,
            })
            .map_err(ControllerError::Present)?;

        // a frame that never reached the screen is rendered again next iteration
        self.dirty = false;

        Ok(())
    }

    /// One loop iteration: drain commands, then render when something changed.
    pub fn run_frame<S, P>(
        &mut self,
        source: &mut S,
        presenter: &mut P,
    ) -> Result<LoopControl, ControllerError<P::Error>>
    where
        S: CommandSource + ?Sized,
        P: FramePresenterPort + ?Sized,
    {
        if self.apply_pending(source) == LoopControl::Quit {
            return Ok(LoopControl::Quit);
        }

        self.render_if_needed(presenter)?;

        Ok(LoopControl::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerArgs;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::dimensions::Dimensions;
    use crate::core::data::point::Point;
    use crate::core::view::command::ViewCommand;
    use crate::core::view::state::SampleStride;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedSource {
        batches: VecDeque<Vec<ViewCommand>>,
    }

    impl ScriptedSource {
        fn with(batches: Vec<Vec<ViewCommand>>) -> Self {
            Self {
                batches: batches.into(),
            }
        }
    }

    impl CommandSource for ScriptedSource {
        fn drain_commands(&mut self) -> Vec<ViewCommand> {
            self.batches.pop_front().unwrap_or_default()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct PresentedFrame {
        generation: u64,
        dimensions: Dimensions,
        center: Complex,
        centre_colour: Colour,
    }

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<PresentedFrame>,
    }

    impl FramePresenterPort for RecordingPresenter {
        type Error = std::io::Error;

        fn present(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error> {
            let dimensions = frame.pixel_buffer.dimensions();
            let centre = Point {
                x: dimensions.width() / 2,
                y: dimensions.height() / 2,
            };

            self.frames.push(PresentedFrame {
                generation: frame.generation,
                dimensions,
                center: frame.view.center(),
                centre_colour: frame.pixel_buffer.pixel(centre).unwrap(),
            });

            Ok(())
        }
    }

    struct FailingPresenter;

    impl FramePresenterPort for FailingPresenter {
        type Error = std::io::Error;

        fn present(&mut self, _frame: &Frame<'_>) -> Result<(), Self::Error> {
            Err(std::io::Error::other("surface lost"))
        }
    }

    fn small_config() -> ExplorerConfig {
        let args = ExplorerArgs {
            width: 10,
            height: 10,
            iterations: 50,
            ..ExplorerArgs::default()
        };
        ExplorerConfig::try_from(&args).unwrap()
    }

    #[test]
    fn test_first_iteration_renders_initial_view() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::default();
        let mut presenter = RecordingPresenter::default();

        let control = controller.run_frame(&mut source, &mut presenter).unwrap();

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(presenter.frames.len(), 1);
        assert_eq!(presenter.frames[0].generation, 1);
        assert_eq!(presenter.frames[0].dimensions, Dimensions::new(10, 10).unwrap());
        assert_eq!(presenter.frames[0].center, Complex::ZERO);
        assert_eq!(presenter.frames[0].centre_colour, Colour::grey(255));
        assert!(controller.last_render_duration().is_some());
    }

    #[test]
    fn test_unchanged_view_is_not_rerendered() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::default();
        let mut presenter = RecordingPresenter::default();

        controller.run_frame(&mut source, &mut presenter).unwrap();
        controller.run_frame(&mut source, &mut presenter).unwrap();
        controller.run_frame(&mut source, &mut presenter).unwrap();

        assert_eq!(presenter.frames.len(), 1);
        assert!(!controller.needs_render());
    }

    #[test]
    fn test_all_queued_commands_apply_before_one_frame() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::with(vec![
            vec![],
            vec![ViewCommand::PanRight, ViewCommand::PanRight, ViewCommand::PanUp],
        ]);
        let mut presenter = RecordingPresenter::default();

        controller.run_frame(&mut source, &mut presenter).unwrap();
        controller.run_frame(&mut source, &mut presenter).unwrap();

        assert_eq!(presenter.frames.len(), 2);
        assert_eq!(presenter.frames[1].generation, 2);
        assert_eq!(presenter.frames[1].center, Complex::new(1.0, -0.5));
    }

    #[test]
    fn test_quit_stops_before_rendering() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::with(vec![vec![ViewCommand::ZoomIn, ViewCommand::Quit]]);
        let mut presenter = RecordingPresenter::default();

        let control = controller.run_frame(&mut source, &mut presenter).unwrap();

        assert_eq!(control, LoopControl::Quit);
        assert!(presenter.frames.is_empty());
        assert_eq!(controller.view().zoom_steps(), 1);
    }

    #[test]
    fn test_commands_after_quit_are_dropped() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::with(vec![vec![ViewCommand::Quit, ViewCommand::ZoomIn]]);

        assert_eq!(controller.apply_pending(&mut source), LoopControl::Quit);
        assert_eq!(controller.view().zoom_steps(), 0);
    }

    #[test]
    fn test_clamped_command_still_marks_view_dirty() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::with(vec![vec![], vec![ViewCommand::DecreaseDetail]]);
        let mut presenter = RecordingPresenter::default();

        controller.run_frame(&mut source, &mut presenter).unwrap();
        controller.apply_pending(&mut source);

        assert!(controller.needs_render());
        assert_eq!(controller.view().max_iterations(), 100);
    }

    #[test]
    fn test_toggle_resolution_renders_at_new_stride() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::with(vec![vec![ViewCommand::ToggleResolution]]);
        let mut presenter = RecordingPresenter::default();

        controller.run_frame(&mut source, &mut presenter).unwrap();

        assert_eq!(controller.view().sample_stride(), SampleStride::Full);
        assert_eq!(presenter.frames.len(), 1);
    }

    #[test]
    fn test_presenter_failure_is_reported() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::default();

        let result = controller.run_frame(&mut source, &mut FailingPresenter);

        assert!(matches!(result, Err(ControllerError::Present(_))));
        assert_eq!(controller.generation(), 1);
        assert!(controller.needs_render());
    }

    #[test]
    fn test_frame_is_presented_again_after_presenter_failure() {
        let mut controller = InteractiveController::new(&small_config());
        let mut source = ScriptedSource::default();
        let mut presenter = RecordingPresenter::default();

        assert!(controller.run_frame(&mut source, &mut FailingPresenter).is_err());
        controller.run_frame(&mut source, &mut presenter).unwrap();

        assert_eq!(presenter.frames.len(), 1);
        assert_eq!(presenter.frames[0].generation, 2);
        assert!(!controller.needs_render());
    }
}
