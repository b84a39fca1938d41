//! Window presenter: copies frames into a `pixels` surface and draws the
//! egui status overlay over them.

pub mod presenter;

pub use presenter::{FrameStatus, PixelsPresenter, PresentError};
