use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colouring::errors::ColourMapError;

/// Turns an escape step count into the colour painted for that sample.
pub trait ColourMap {
    fn map(&self, steps: u32) -> Result<Colour, ColourMapError>;
}
