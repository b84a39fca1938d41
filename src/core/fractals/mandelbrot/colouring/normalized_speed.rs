use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colouring::errors::ColourMapError;
use crate::core::util::scale::scale;

/// Greyscale from `sqrt(steps / max_iterations)`: quick escapes are dark and
/// points that reach the cap are white.
#[derive(Debug)]
pub struct NormalizedSpeedColourMap {
    max_iterations: u32,
}

impl NormalizedSpeedColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn intensity(&self, steps: u32) -> u8 {
        let speed = (f64::from(steps) / f64::from(self.max_iterations)).sqrt();

        scale(speed, 0.0, 1.0, 0.0, 255.0) as u8
    }
}

impl ColourMap for NormalizedSpeedColourMap {
    fn map(&self, steps: u32) -> Result<Colour, ColourMapError> {
        if steps > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: steps,
                max_iterations: self.max_iterations,
            });
        }

        Ok(Colour::grey(self.intensity(steps)))
    }
}
