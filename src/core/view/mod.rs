//! View state and the discrete commands that move it between frames.

pub mod command;
pub mod limits;
pub mod state;
