//! Single-threaded frame loop for interactive exploration.
//!
//! Each iteration drains queued commands into the view, renders one full frame
//! when the view changed, and hands it to the presenter. Frames are always
//! complete when presented.

mod controller;
pub mod data;
pub mod ports;

pub use controller::{ControllerError, InteractiveController, LoopControl};
pub use data::frame::Frame;
pub use ports::{CommandSource, FramePresenterPort};
