/// Discrete user intents, each applied once per occurrence between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    IncreaseDetail,
    DecreaseDetail,
    ToggleResolution,
    CycleColouring,
    ResetView,
    Quit,
}

/// Outcome of applying one command to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    Applied,
    /// The command hit a limit and was corrected to stay in range.
    Clamped,
    Quit,
}
