#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Equal intensity on every channel.
    #[must_use]
    pub const fn grey(intensity: u8) -> Self {
        Self {
            r: intensity,
            g: intensity,
            b: intensity,
        }
    }
}
