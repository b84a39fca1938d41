#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    /// Change of the zoom accumulator per zoom command.
    pub zoom_step: f64,
    pub min_zoom_steps: i32,
    pub max_zoom_steps: i32,
    pub detail_step: u32,
    pub min_iterations: u32,
}

impl ViewLimits {
    /// Half the side of the visible square for a zoom accumulator of `zoom_steps * zoom_step`.
    #[must_use]
    pub fn half_extent(&self, zoom_steps: i32) -> f64 {
        (-f64::from(zoom_steps) * self.zoom_step).exp()
    }

    #[must_use]
    pub fn clamp_zoom_steps(&self, zoom_steps: i32) -> i32 {
        zoom_steps.clamp(self.min_zoom_steps, self.max_zoom_steps)
    }
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            zoom_step: 0.1,
            // e^5 is far enough out to see the whole set many times over
            min_zoom_steps: -50,
            // e^-28 keeps a 500 pixel row a few ulps apart in f64
            max_zoom_steps: 280,
            detail_step: 100,
            min_iterations: 100,
        }
    }
}
