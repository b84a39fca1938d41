use crate::core::data::colour::Colour;

/// A fixed-size surface the frame renderer writes colours into.
///
/// `fill_rect` is only ever called with rectangles that lie fully inside
/// `width()` x `height()`; the renderer clips sample blocks before writing.
pub trait PixelSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour);
}
