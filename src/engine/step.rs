//! Per-position mask step evaluation.
//!
//! Each mask position is resolved independently against the shared cursor.
//! The two rule kinds fall back differently when the next input character does
//! not match:
//!
//! ```text
//! Placeholder ── input left? ──no──▶ absent
//!                    │yes
//!                    ▼
//!               next() valid? ──yes──▶ emit it
//!                    │no
//!                    └──▶ skip it, retry same position
//!
//! Literal ────── input left? ──no──▶ absent
//!                    │yes
//!                    ▼
//!               next() == symbol? ──yes──▶ emit it (pass-through)
//!                    │no
//!                    └──▶ prev(), emit symbol (synthesized)
//! ```
//!
//! A placeholder therefore never rewinds, and a literal moves the cursor by at
//! most one character.

use super::cursor::Cursor;
use crate::{Rule, RuleKind};

/// What a mask position did with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepAction {
    /// A placeholder consumed a valid input character.
    Consumed,
    /// A literal found itself in the input and consumed it.
    PassedThrough,
    /// A literal was emitted without consuming input.
    Synthesized,
    /// Input ran out; nothing was emitted.
    Exhausted,
}

/// Trace of one mask position, collected by verbose runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    /// Character index within the mask.
    pub index: usize,
    pub symbol: char,
    pub action: StepAction,
    /// Character appended to the output, if any.
    pub emitted: Option<char>,
    /// Input characters a placeholder rejected before settling.
    pub skipped: Vec<char>,
    /// Cursor position after the step.
    pub position: usize,
}

/// Result of evaluating one mask position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step {
    pub emission: Option<char>,
    pub action: StepAction,
    pub skipped: Vec<char>,
}

impl Step {
    fn emit(c: char, action: StepAction) -> Self {
        Self { emission: Some(c), action, skipped: Vec::new() }
    }

    fn exhausted(skipped: Vec<char>) -> Self {
        Self { emission: None, action: StepAction::Exhausted, skipped }
    }

    /// A literal emitted after the input ran out (cosmetic completion).
    pub fn completed(symbol: char) -> Self {
        Self::emit(symbol, StepAction::Synthesized)
    }
}

/// Resolve one mask position against the cursor.
pub(crate) fn evaluate(rule: &Rule, cursor: &mut Cursor) -> Step {
    match rule.kind {
        RuleKind::Placeholder => resolve_placeholder(rule, cursor),
        RuleKind::Literal => resolve_literal(rule, cursor),
    }
}

fn resolve_placeholder(rule: &Rule, cursor: &mut Cursor) -> Step {
    let mut skipped = Vec::new();

    while let Some(c) = cursor.next() {
        if rule.accepts(c) {
            return Step { emission: cursor.current(), action: StepAction::Consumed, skipped };
        }
        skipped.push(c);
    }

    Step::exhausted(skipped)
}

fn resolve_literal(rule: &Rule, cursor: &mut Cursor) -> Step {
    let Some(c) = cursor.next() else {
        return Step::exhausted(Vec::new());
    };

    if rule.accepts(c) {
        return Step::emit(c, StepAction::PassedThrough);
    }

    cursor.prev();
    Step::emit(rule.symbol, StepAction::Synthesized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compiled_mask::RULE_TABLE;

    fn rule(symbol: char) -> &'static Rule {
        RULE_TABLE.lookup(symbol).unwrap()
    }

    #[test]
    fn placeholder_consumes_valid_char() {
        let mut cursor = Cursor::new("7x");
        let step = evaluate(rule('9'), &mut cursor);
        assert_eq!(step, Step { emission: Some('7'), action: StepAction::Consumed, skipped: vec![] });
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn placeholder_skips_until_valid() {
        let mut cursor = Cursor::new("-.a5b");
        let step = evaluate(rule('9'), &mut cursor);
        assert_eq!(step.emission, Some('5'));
        assert_eq!(step.skipped, vec!['-', '.', 'a']);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.rewinds(), 0);
    }

    #[test]
    fn placeholder_exhausts_after_skipping() {
        let mut cursor = Cursor::new("ab");
        let step = evaluate(rule('9'), &mut cursor);
        assert_eq!(step.action, StepAction::Exhausted);
        assert_eq!(step.emission, None);
        assert_eq!(step.skipped, vec!['a', 'b']);
        assert!(!cursor.has_next());
    }

    #[test]
    fn literal_passes_through_matching_char() {
        let mut cursor = Cursor::new(".1");
        let step = evaluate(rule('.'), &mut cursor);
        assert_eq!(step.emission, Some('.'));
        assert_eq!(step.action, StepAction::PassedThrough);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn literal_synthesizes_and_rewinds() {
        let mut cursor = Cursor::new("12");
        let step = evaluate(rule('/'), &mut cursor);
        assert_eq!(step.emission, Some('/'));
        assert_eq!(step.action, StepAction::Synthesized);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.rewinds(), 1);
        assert_eq!(cursor.next(), Some('1'));
    }

    #[test]
    fn literal_on_empty_input_is_absent() {
        let mut cursor = Cursor::new("");
        let step = evaluate(rule('-'), &mut cursor);
        assert_eq!(step.emission, None);
        assert_eq!(step.action, StepAction::Exhausted);
    }

    #[test]
    fn literal_does_not_pass_through_other_separators() {
        let mut cursor = Cursor::new("-");
        let step = evaluate(rule('.'), &mut cursor);
        assert_eq!(step.emission, Some('.'));
        assert_eq!(step.action, StepAction::Synthesized);
        assert_eq!(cursor.position(), 0);
    }
}
