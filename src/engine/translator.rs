//! The driver: walk a compiled mask over one input.
//!
//! ```text
//! CompiledMask ──┐
//!                ├─ for each rule: evaluate(rule, cursor) ──▶ Option<char>
//! input ─ Cursor ┘                                              │
//!                                           drop None, concat ◀─┘
//! ```
//!
//! Once a position reports the input as exhausted, every later position does
//! too, so output stops growing (truncation). With
//! [`Options::complete_literals`], literal positions reached after the input
//! ran out are still synthesized up to the next placeholder.
//!
//! ## Debugging
//!
//! Setting `MASKFMT_DEBUG_STEPS=1` prints one `[step]` line per mask position
//! (or emits `tracing` debug events with the `tracing` feature).

use super::compiled_mask::CompiledMask;
use super::cursor::Cursor;
use super::metrics::{RunMetrics, RunResult};
use super::step::{Step, StepAction, StepTrace, evaluate};
use crate::{Options, RuleKind};
use std::time::Instant;

/// Translator applies a `CompiledMask` to a single input.
///
/// Usage: create with `Translator::new(&mask, input)` then call `run(options)`
/// or `run_with_metrics(options)`. Both consume the translator, so its cursor
/// is never reused.
#[derive(Debug)]
pub struct Translator<'a> {
    mask: &'a CompiledMask,
    cursor: Cursor,
}

impl<'a> Translator<'a> {
    pub(crate) fn new(mask: &'a CompiledMask, input: &str) -> Self {
        Self { mask, cursor: Cursor::new(input) }
    }

    /// Format the input, returning only the output string.
    pub fn run(mut self, options: &Options) -> String {
        let (output, _) = self.drive(options, None);
        output
    }

    /// Format the input, collecting a per-step trace and counters.
    pub fn run_with_metrics(mut self, options: &Options) -> RunResult {
        let started = Instant::now();
        let mut steps = Vec::with_capacity(self.mask.rules.len());
        let (output, mut metrics) = self.drive(options, Some(&mut steps));
        metrics.total = started.elapsed();

        RunResult { output, steps, metrics }
    }

    fn drive(&mut self, options: &Options, mut trace: Option<&mut Vec<StepTrace>>) -> (String, RunMetrics) {
        let mut output = String::with_capacity(self.mask.rules.len());
        let mut metrics = RunMetrics::default();
        // Set once a placeholder finds no input; completion never crosses it.
        let mut stopped = false;

        for (index, rule) in self.mask.rules.iter().enumerate() {
            let completing = options.complete_literals
                && !stopped
                && rule.kind == RuleKind::Literal
                && !self.cursor.has_next()
                && self.cursor.position() > 0;

            let step = if completing { Step::completed(rule.symbol) } else { evaluate(rule, &mut self.cursor) };

            if step.action == StepAction::Exhausted && rule.is_placeholder() {
                stopped = true;
            }

            debug_trace!(
                "[step] index={} symbol={:?} rule={} action={:?} emitted={:?} skipped={:?} position={}",
                index,
                rule.symbol,
                rule.name,
                step.action,
                step.emission,
                step.skipped,
                self.cursor.position()
            );

            metrics.record(&step);
            if let Some(c) = step.emission {
                output.push(c);
            }

            if let Some(steps) = trace.as_deref_mut() {
                steps.push(StepTrace {
                    index,
                    symbol: rule.symbol,
                    action: step.action,
                    emitted: step.emission,
                    skipped: step.skipped,
                    position: self.cursor.position(),
                });
            }
        }

        metrics.rewinds = self.cursor.rewinds();
        (output, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mask: &str, input: &str) -> RunResult {
        let compiled = CompiledMask::new(mask).unwrap();
        Translator::new(&compiled, input).run_with_metrics(&Options::default())
    }

    #[test]
    fn canonical_document_mask() {
        let res = run("999.999.999-99", "48705796501");
        assert_eq!(res.output, "487.057.965-01");
        assert_eq!(res.metrics.consumed, 11);
        assert_eq!(res.metrics.synthesized, 3);
        assert_eq!(res.metrics.rewinds, 3);
        assert_eq!(res.metrics.passed_through, 0);
        assert_eq!(res.metrics.exhausted, 0);
        assert_eq!(res.steps.len(), 14);
    }

    #[test]
    fn formatted_input_passes_through() {
        let res = run("999.999.999-99", "487.057.965-01");
        assert_eq!(res.output, "487.057.965-01");
        assert_eq!(res.metrics.passed_through, 3);
        assert_eq!(res.metrics.synthesized, 0);
        assert_eq!(res.metrics.rewinds, 0);
    }

    #[test]
    fn every_position_after_exhaustion_is_absent() {
        let res = run("999-999", "123");
        assert_eq!(res.output, "123");
        assert_eq!(res.metrics.exhausted, 4);
        assert!(res.steps[3..].iter().all(|s| s.action == StepAction::Exhausted && s.emitted.is_none()));
    }

    #[test]
    fn trace_records_skipped_characters() {
        let res = run("AAA", "a1b2c3");
        assert_eq!(res.output, "abc");
        assert_eq!(res.steps[1].skipped, vec!['1']);
        assert_eq!(res.steps[2].skipped, vec!['2']);
        assert_eq!(res.steps[2].position, 5);
        assert_eq!(res.metrics.skipped, 2);
    }

    #[test]
    fn plain_run_matches_traced_run() {
        let compiled = CompiledMask::new("(99) 9999-9999").unwrap();
        let opts = Options::default();
        let plain = Translator::new(&compiled, "1x1 2345 678").run(&opts);
        let traced = Translator::new(&compiled, "1x1 2345 678").run_with_metrics(&opts);
        assert_eq!(plain, traced.output);
        assert_eq!(plain, "(11) 2345-678");
    }

    #[test]
    fn completion_stops_at_next_placeholder() {
        let compiled = CompiledMask::new("99-99-99").unwrap();
        let opts = Options { complete_literals: true };
        let res = Translator::new(&compiled, "12").run_with_metrics(&opts);
        assert_eq!(res.output, "12-");
        assert_eq!(res.steps[2].action, StepAction::Synthesized);
        assert_eq!(res.steps[5].action, StepAction::Exhausted);
    }

    #[test]
    fn completion_does_not_follow_a_starved_placeholder() {
        let compiled = CompiledMask::new("9-9").unwrap();
        let opts = Options { complete_literals: true };
        assert_eq!(Translator::new(&compiled, "abc").run(&opts), "");
    }
}
