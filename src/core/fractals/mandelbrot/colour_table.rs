use crate::core::data::colour::Colour;

const RAMP_STEPS: u16 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PaletteKind {
    /// Red to magenta, then red fading to black.
    #[default]
    RedMagenta,
    /// The default ramps followed by green and blue sweeps.
    Extended,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::RedMagenta, Self::Extended];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RedMagenta => "Red-magenta",
            Self::Extended => "Extended",
        }
    }

    fn ramps(self) -> &'static [ColourRamp] {
        match self {
            Self::RedMagenta => &RED_MAGENTA_RAMPS,
            Self::Extended => &EXTENDED_RAMPS,
        }
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Linear sweep from `start` towards `end`, `end` itself excluded.
#[derive(Debug, Clone, Copy)]
struct ColourRamp {
    start: Colour,
    end: Colour,
}

impl ColourRamp {
    const fn new(start: Colour, end: Colour) -> Self {
        Self { start, end }
    }

    fn colours(self) -> impl Iterator<Item = Colour> {
        (0..RAMP_STEPS).map(move |step| Colour {
            r: lerp_channel(self.start.r, self.end.r, step),
            g: lerp_channel(self.start.g, self.end.g, step),
            b: lerp_channel(self.start.b, self.end.b, step),
        })
    }
}

fn lerp_channel(start: u8, end: u8, step: u16) -> u8 {
    let delta = i32::from(end) - i32::from(start);
    let value = i32::from(start) + delta * i32::from(step) / i32::from(RAMP_STEPS);

    value as u8
}

const RED: Colour = Colour::new(255, 0, 0);
const MAGENTA: Colour = Colour::new(255, 0, 255);
const GREEN: Colour = Colour::new(0, 255, 0);
const CYAN: Colour = Colour::new(0, 255, 255);
const BLUE: Colour = Colour::new(0, 0, 255);

static RED_MAGENTA_RAMPS: [ColourRamp; 2] = [
    ColourRamp::new(RED, MAGENTA),
    ColourRamp::new(RED, Colour::BLACK),
];

static EXTENDED_RAMPS: [ColourRamp; 6] = [
    ColourRamp::new(RED, MAGENTA),
    ColourRamp::new(RED, Colour::BLACK),
    ColourRamp::new(Colour::BLACK, GREEN),
    ColourRamp::new(GREEN, CYAN),
    ColourRamp::new(CYAN, BLUE),
    ColourRamp::new(BLUE, Colour::BLACK),
];

/// Ordered palette built once at startup, indexed by `[0, len - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourTable {
    colours: Vec<Colour>,
}

impl Default for ColourTable {
    fn default() -> Self {
        Self::new(PaletteKind::default())
    }
}

impl ColourTable {
    #[must_use]
    pub fn new(kind: PaletteKind) -> Self {
        let mut colours: Vec<Colour> = kind
            .ramps()
            .iter()
            .flat_map(|ramp| ramp.colours())
            .collect();

        colours.push(Colour::BLACK);

        Self { colours }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.colours.len() - 1
    }

    /// Colour at `index`, clamped to the last entry.
    #[must_use]
    pub fn colour_at(&self, index: usize) -> Colour {
        self.colours[index.min(self.last_index())]
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}
