use crate::core::ecdf::CdfCurve;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Cancelled,
    Completed,
}

/// One renderable unit of the animation: a period's CDF curve plus the
/// metadata a chart surface needs to draw it without touching the core.
#[derive(Clone, Debug)]
pub struct Frame {
    pub period: i32,
    pub curve: CdfCurve,
    pub sample_count: usize,
    /// Shared axis range for the whole run; identical on every frame.
    pub x_range: (f64, f64),
    /// Fraction of the timeline emitted so far, in (0, 1].
    pub progress: f64,
    /// Human-readable label, e.g. "Showing year: 2012".
    pub status: String,
}
