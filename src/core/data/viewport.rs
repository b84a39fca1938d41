use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;
use crate::core::util::scale::scale;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport half extent must be positive and finite, got {half_extent}")]
    InvalidHalfExtent { half_extent: f64 },
}

/// Square region of the complex plane shown on screen, `center ± half_extent` on both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min: Complex,
    max: Complex,
}

impl Viewport {
    pub fn centered(center: Complex, half_extent: f64) -> Result<Self, ViewportError> {
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(ViewportError::InvalidHalfExtent { half_extent });
        }

        Ok(Self {
            min: Complex::new(center.real - half_extent, center.imag - half_extent),
            max: Complex::new(center.real + half_extent, center.imag + half_extent),
        })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    /// Plane coordinate of a pixel, mapping `[0, width)` onto `[min.real, max.real)`
    /// and `[0, height)` onto `[min.imag, max.imag)`.
    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point, dimensions: Dimensions) -> Complex {
        Complex {
            real: scale(
                f64::from(pixel.x),
                0.0,
                f64::from(dimensions.width()),
                self.min.real,
                self.max.real,
            ),
            imag: scale(
                f64::from(pixel.y),
                0.0,
                f64::from(dimensions.height()),
                self.min.imag,
                self.max.imag,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_is_square_around_center() {
        let viewport = Viewport::centered(Complex::new(-0.5, 0.25), 1.0).unwrap();

        assert_eq!(viewport.min(), Complex::new(-1.5, -0.75));
        assert_eq!(viewport.max(), Complex::new(0.5, 1.25));
        assert_eq!(viewport.width(), viewport.height());
    }

    #[test]
    fn test_half_extent_must_be_positive() {
        assert_eq!(
            Viewport::centered(Complex::ZERO, 0.0),
            Err(ViewportError::InvalidHalfExtent { half_extent: 0.0 })
        );
        assert!(Viewport::centered(Complex::ZERO, -1.0).is_err());
        assert!(Viewport::centered(Complex::ZERO, f64::NAN).is_err());
        assert!(Viewport::centered(Complex::ZERO, f64::INFINITY).is_err());
    }

    #[test]
    fn test_pixel_to_plane_top_left() {
        let viewport = Viewport::centered(Complex::ZERO, 1.0).unwrap();
        let dimensions = Dimensions::new(500, 500).unwrap();

        let c = viewport.pixel_to_plane(Point { x: 0, y: 0 }, dimensions);

        assert_eq!(c, Complex::new(-1.0, -1.0));
    }

    #[test]
    fn test_pixel_to_plane_center_pixel() {
        let viewport = Viewport::centered(Complex::ZERO, 1.0).unwrap();
        let dimensions = Dimensions::new(10, 10).unwrap();

        let c = viewport.pixel_to_plane(Point { x: 5, y: 5 }, dimensions);

        assert_eq!(c, Complex::ZERO);
    }

    #[test]
    fn test_pixel_to_plane_last_pixel_stays_below_max() {
        let viewport = Viewport::centered(Complex::ZERO, 1.0).unwrap();
        let dimensions = Dimensions::new(4, 4).unwrap();

        let c = viewport.pixel_to_plane(Point { x: 3, y: 3 }, dimensions);

        assert_eq!(c, Complex::new(0.5, 0.5));
    }
}
