use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::Event;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::config::ExplorerConfig;
use crate::controllers::interactive::{ControllerError, LoopControl};
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::PresentError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("pixels surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize surface: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    Frame(#[from] ControllerError<PresentError>),
}

/// Opens the explorer window and runs the frame loop until quit.
pub fn run_gui(config: &ExplorerConfig) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(PhysicalSize::new(
                config.dimensions.width(),
                config.dimensions.height(),
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, config)?;
    let mut failure: Option<GuiError> = None;

    log::info!(
        "Opened {}x{} window, {} iterations, {}",
        config.dimensions.width(),
        config.dimensions.height(),
        config.max_iterations,
        config.colouring,
    );

    event_loop.run(|event, elwt| {
        let result = match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => app.handle_window_event(event).map(|()| LoopControl::Continue),
            Event::AboutToWait => app.about_to_wait(),
            _ => Ok(LoopControl::Continue),
        };

        match result {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Quit) => elwt.exit(),
            Err(error) => {
                log::error!("{error}");
                failure = Some(error);
                elwt.exit();
            }
        }
    })?;

    failure.map_or(Ok(()), Err)
}
