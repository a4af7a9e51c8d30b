//! Conversion run metrics.
//!
//! - `Converter::convert` for normal operation.
//! - `Converter::run_with_metrics` for debugging: every pipeline stage is
//!   timed and its output text kept.
//!
//! Stage texts are cloned, so collection is opt-in.

use crate::Representation;
use std::time::Duration;

/// One pipeline stage as it ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageMetrics {
    /// Stage name (`whitespace`, `prepare`, `breathing`, `strip`, `substitute`,
    /// `resolve`, `normalize`).
    pub stage: &'static str,
    /// The map leg the stage belonged to. `None` for stages that run once per
    /// conversion, before any leg.
    pub leg: Option<(Representation, Representation)>,
    /// Text after the stage.
    pub text: String,
    pub duration: Duration,
}

impl StageMetrics {
    pub(crate) fn new(stage: &'static str, text: String, duration: Duration) -> Self {
        StageMetrics { stage, leg: None, text, duration }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Converter::run_with_metrics`](super::Converter::run_with_metrics).
    pub total: Duration,
    /// Stages in execution order.
    pub stages: Vec<StageMetrics>,
}

/// Converter output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub output: String,
    pub metrics: RunMetrics,
}
