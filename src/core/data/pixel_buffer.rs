use thiserror::Error;

use crate::core::actions::render_frame::ports::pixel_surface::PixelSurface;
use crate::core::data::colour::Colour;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::point::Point;

const RGB_BYTES: usize = 3;
const RGBA_BYTES: usize = 4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {}x{} surface", .pixel.x, .pixel.y, .dimensions.width(), .dimensions.height())]
    PixelOutsideBounds { pixel: Point, dimensions: Dimensions },
    #[error("expected buffer of {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Flat, row-major RGB surface. Pixel `(x, y)` starts at byte `(y * width + x) * 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: vec![0; dimensions.size() * RGB_BYTES],
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.byte_index(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.byte_index(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Expands the RGB data into an RGBA frame with opaque alpha.
    pub fn write_rgba(&self, frame: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.dimensions.size() * RGBA_BYTES;

        if frame.len() != expected {
            return Err(PixelBufferError::SizeMismatch {
                expected,
                actual: frame.len(),
            });
        }

        for (src, dst) in self
            .buffer
            .chunks_exact(RGB_BYTES)
            .zip(frame.chunks_exact_mut(RGBA_BYTES))
        {
            dst[..RGB_BYTES].copy_from_slice(src);
            dst[3] = 255;
        }

        Ok(())
    }

    fn byte_index(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.dimensions.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                dimensions: self.dimensions,
            });
        }

        let width = self.dimensions.width() as usize;

        Ok((pixel.y as usize * width + pixel.x as usize) * RGB_BYTES)
    }
}

impl PixelSurface for PixelBuffer {
    fn width(&self) -> u32 {
        self.dimensions.width()
    }

    fn height(&self) -> u32 {
        self.dimensions.height()
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        debug_assert!(x + width <= self.dimensions.width());
        debug_assert!(y + height <= self.dimensions.height());

        let rgb = [colour.r, colour.g, colour.b];
        let row_bytes = self.dimensions.width() as usize * RGB_BYTES;
        let start = x as usize * RGB_BYTES;
        let end = (x + width) as usize * RGB_BYTES;

        for row in self
            .buffer
            .chunks_exact_mut(row_bytes)
            .skip(y as usize)
            .take(height as usize)
        {
            for pixel in row[start..end].chunks_exact_mut(RGB_BYTES) {
                pixel.copy_from_slice(&rgb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dimensions(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(create_dimensions(10, 10));

        assert_eq!(buffer.buffer().len(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_reads_back_what_set_pixel_wrote() {
        let mut buffer = PixelBuffer::new(create_dimensions(2, 2));

        buffer.set_pixel(Point { x: 0, y: 1 }, Colour::new(0, 0, 255)).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap(), Colour::new(0, 0, 255));
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(create_dimensions(3, 2));

        buffer
            .set_pixel(Point { x: 2, y: 1 }, Colour::new(1, 2, 3))
            .unwrap();

        assert_eq!(&buffer.buffer()[15..18], &[1, 2, 3]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(create_dimensions(3, 2));

        let result = buffer.set_pixel(Point { x: 3, y: 0 }, Colour::BLACK);

        assert!(matches!(
            result,
            Err(PixelBufferError::PixelOutsideBounds { .. })
        ));
    }

    #[test]
    fn test_fill_rect_only_touches_the_block() {
        let mut buffer = PixelBuffer::new(create_dimensions(4, 4));
        let colour = Colour::new(9, 8, 7);

        buffer.fill_rect(1, 2, 2, 2, colour);

        for y in 0..4 {
            for x in 0..4 {
                let expected = if (1..3).contains(&x) && (2..4).contains(&y) {
                    colour
                } else {
                    Colour::BLACK
                };
                assert_eq!(buffer.pixel(Point { x, y }).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_write_rgba_sets_opaque_alpha() {
        let mut buffer = PixelBuffer::new(create_dimensions(2, 1));
        buffer.set_pixel(Point { x: 0, y: 0 }, Colour::new(255, 0, 0)).unwrap();
        buffer.set_pixel(Point { x: 1, y: 0 }, Colour::new(0, 0, 255)).unwrap();
        let mut frame = vec![0; 8];

        buffer.write_rgba(&mut frame).unwrap();

        assert_eq!(frame, vec![255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_write_rgba_rejects_wrong_frame_size() {
        let buffer = PixelBuffer::new(create_dimensions(2, 1));
        let mut frame = vec![0; 6];

        assert_eq!(
            buffer.write_rgba(&mut frame),
            Err(PixelBufferError::SizeMismatch {
                expected: 8,
                actual: 6
            })
        );
    }
}
