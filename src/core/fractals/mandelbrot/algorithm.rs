use thiserror::Error;

use crate::core::actions::render_frame::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::complex::Complex;

/// Squared bailout radius: an orbit with `|z| > 2` has escaped.
pub const BAILOUT_SQUARED: f64 = 4.0;

pub const DEFAULT_EXPONENT: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MandelbrotAlgorithmError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("exponent must be finite, got {0}")]
    NonFiniteExponent(f64),
}

/// Escape-time evaluator for `z -> z² + c`, generalised through the factor applied
/// to the cross term of the imaginary update (`2` gives the classic set).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    exponent: f64,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, exponent: f64) -> Result<Self, MandelbrotAlgorithmError> {
        if max_iterations == 0 {
            return Err(MandelbrotAlgorithmError::ZeroMaxIterations);
        }

        if !exponent.is_finite() {
            return Err(MandelbrotAlgorithmError::NonFiniteExponent(exponent));
        }

        Ok(Self {
            max_iterations,
            exponent,
        })
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    #[must_use]
    #[inline]
    pub fn evaluate(&self, c: Complex) -> u32 {
        let mut z = c;
        let mut steps = 0;

        while steps < self.max_iterations && z.magnitude_squared() <= BAILOUT_SQUARED {
            z = Complex::new(
                z.real * z.real - z.imag * z.imag + c.real,
                self.exponent * z.real * z.imag + c.imag,
            );
            steps += 1;
        }

        steps
    }
}

impl EscapeAlgorithm for MandelbrotAlgorithm {
    fn escape_steps(&self, c: Complex) -> u32 {
        self.evaluate(c)
    }

    fn iteration_cap(&self) -> u32 {
        self.max_iterations
    }
}
