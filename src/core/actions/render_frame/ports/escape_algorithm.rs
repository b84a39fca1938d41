use crate::core::data::complex::Complex;

/// An escape-time formula evaluated once per sample.
pub trait EscapeAlgorithm {
    /// Steps taken before the orbit of `c` escaped, or `iteration_cap()` if it never did.
    fn escape_steps(&self, c: Complex) -> u32;

    fn iteration_cap(&self) -> u32;
}
