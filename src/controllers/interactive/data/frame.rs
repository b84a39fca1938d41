use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::view::state::ViewState;

/// A completed frame together with the view it was rendered from.
#[derive(Debug)]
pub struct Frame<'a> {
    pub generation: u64,
    pub pixel_buffer: &'a PixelBuffer,
    pub view: &'a ViewState,
    pub render_duration: Duration,
}
