//! Run metrics.
//!
//! Counters are always collected (they are a handful of integer increments);
//! the per-step trace in `RunResult::steps` is only filled by
//! `Translator::run_with_metrics`.

use super::step::{Step, StepAction, StepTrace};
use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for `Translator::run_with_metrics`.
    pub total: Duration,
    /// Placeholder positions that consumed a character.
    pub consumed: usize,
    /// Input characters rejected by placeholders.
    pub skipped: usize,
    /// Literal positions that found themselves in the input.
    pub passed_through: usize,
    /// Literal positions emitted without consuming input.
    pub synthesized: usize,
    /// Mask positions that produced nothing because input ran out.
    pub exhausted: usize,
    /// Single-step cursor rewinds.
    pub rewinds: usize,
}

impl RunMetrics {
    pub(crate) fn record(&mut self, step: &Step) {
        self.skipped += step.skipped.len();
        match step.action {
            StepAction::Consumed => self.consumed += 1,
            StepAction::PassedThrough => self.passed_through += 1,
            StepAction::Synthesized => self.synthesized += 1,
            StepAction::Exhausted => self.exhausted += 1,
        }
    }
}

/// Translator output bundled with the step trace and counters.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub output: String,
    pub steps: Vec<StepTrace>,
    pub metrics: RunMetrics,
}
