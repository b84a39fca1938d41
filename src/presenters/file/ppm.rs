use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes frames as binary PPM (P6), creating parent directories as needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        write_ppm(buffer, &mut writer)?;
        writer.flush()
    }
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    let dimensions = buffer.dimensions();

    // P6: binary RGB, then width height and max channel value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", dimensions.width(), dimensions.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::dimensions::Dimensions;
    use crate::core::data::point::Point;

    #[test]
    fn test_write_ppm_emits_header_then_rgb_bytes() {
        let mut buffer = PixelBuffer::new(Dimensions::new(2, 1).unwrap());
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour::new(255, 0, 128))
            .unwrap();

        let mut out = Vec::new();
        write_ppm(&buffer, &mut out).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[0, 0, 0, 255, 0, 128]);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("mandelbrot_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(Dimensions::new(3, 2).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
