//! Windowed front end built on winit, pixels and egui.

mod app;
pub mod keys;
mod run_gui;

pub use run_gui::{GuiError, run_gui};
