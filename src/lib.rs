pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::config::{ConfigError, ExplorerArgs, ExplorerConfig, ViewArgs};
pub use crate::controllers::headless::{HeadlessController, HeadlessError};
pub use crate::controllers::interactive::{InteractiveController, LoopControl};
pub use crate::core::actions::render_frame::render_frame::{FrameSummary, RenderFrameError, render_frame};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_table::{ColourTable, PaletteKind};
pub use crate::core::fractals::mandelbrot::colouring::kinds::ColouringKind;
pub use crate::core::view::state::ViewState;
pub use crate::presenters::file::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
