use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_table::ColourTable;
use crate::core::fractals::mandelbrot::colouring::errors::ColourMapError;
use crate::core::util::scale::scale;

const CUMULATIVE_SCALE: f64 = 255.0;

/// Occurrences of each step count `0..=max_iterations` over one frame.
///
/// Storage grows with the highest step count recorded, not with the cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramAccumulator {
    max_iterations: u32,
    counts: Vec<u64>,
    total: u64,
}

impl HistogramAccumulator {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            counts: Vec::new(),
            total: 0,
        }
    }

    pub fn record(&mut self, steps: u32) -> Result<(), ColourMapError> {
        if steps > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: steps,
                max_iterations: self.max_iterations,
            });
        }

        let slot = steps as usize;
        if slot >= self.counts.len() {
            self.counts.resize(slot + 1, 0);
        }

        self.counts[slot] += 1;
        self.total += 1;

        Ok(())
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn count(&self, steps: u32) -> u64 {
        self.counts.get(steps as usize).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Running sum of `count(i) / total * 255` for `i` in `0..=steps`, up to the
    /// highest recorded step count.
    fn cumulative(&self) -> Vec<f64> {
        let total = self.total.max(1) as f64;
        let mut running = 0.0;

        self.counts
            .iter()
            .map(|&count| {
                running += count as f64 / total * CUMULATIVE_SCALE;
                running
            })
            .collect()
    }
}

/// Histogram-equalised palette lookup for a single frame.
#[derive(Debug)]
pub struct HistogramColourMap<'a> {
    cumulative: Vec<f64>,
    max_iterations: u32,
    table: &'a ColourTable,
}

impl<'a> HistogramColourMap<'a> {
    #[must_use]
    pub fn new(histogram: &HistogramAccumulator, table: &'a ColourTable) -> Self {
        Self {
            cumulative: histogram.cumulative(),
            max_iterations: histogram.max_iterations(),
            table,
        }
    }

    /// Palette index for `steps`, clamped to the table.
    pub fn palette_index(&self, steps: u32) -> Result<usize, ColourMapError> {
        if steps > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: steps,
                max_iterations: self.max_iterations,
            });
        }

        // past the highest recorded count the running sum no longer changes
        let cumulative = self
            .cumulative
            .get(steps as usize)
            .or(self.cumulative.last())
            .copied()
            .unwrap_or(0.0);

        let position = scale(
            cumulative,
            0.0,
            CUMULATIVE_SCALE,
            0.0,
            self.table.last_index() as f64,
        );

        Ok((position.max(0.0) as usize).min(self.table.last_index()))
    }
}

impl ColourMap for HistogramColourMap<'_> {
    fn map(&self, steps: u32) -> Result<Colour, ColourMapError> {
        Ok(self.table.colour_at(self.palette_index(steps)?))
    }
}
