//! Port definitions for the interactive controller.
//!
//! The controller pulls commands from a [`CommandSource`] and pushes finished
//! frames to a [`FramePresenterPort`]; it knows nothing of windows or keyboards.

pub mod command_source;
pub mod frame_presenter;

pub use command_source::CommandSource;
pub use frame_presenter::FramePresenterPort;
