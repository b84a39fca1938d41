#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColouringKind {
    /// Greyscale by the square root of the normalised escape step count.
    #[default]
    NormalizedSpeed,
    /// Palette lookup by the frame's cumulative step-count distribution.
    HistogramEqualized,
}

impl ColouringKind {
    pub const ALL: &'static [Self] = &[Self::NormalizedSpeed, Self::HistogramEqualized];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NormalizedSpeed => "Normalized speed",
            Self::HistogramEqualized => "Histogram equalized",
        }
    }

    /// The kind after `self` in `ALL`, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);

        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ColouringKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
