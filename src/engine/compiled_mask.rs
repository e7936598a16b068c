//! Mask compilation and coarse character classification.
//!
//! Formatting is split into two phases, the same way for every input:
//!
//! 1. **Compile** (this module): resolve each mask symbol against the static
//!    [`RuleTable`] once, producing a `CompiledMask`. Unknown symbols are
//!    rejected here, before any input is read.
//! 2. **Run** (see `translator.rs`): walk the compiled rules with a fresh
//!    `Cursor` per input.
//!
//! `CharClasses` is a cheap summary of which character classes a string (or a
//! mask's placeholders) contains. It does not affect formatting; verbose runs
//! report it so a caller can see at a glance why nothing matched.
//!
//! ## Invariants
//!
//! - `CompiledMask::rules` has one entry per mask `char`, in mask order.
//! - Every `&'static Rule` points into `RULE_TABLE`.

use crate::error::MaskError;
use crate::{Rule, RuleKind};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Rule identifier (index into the rule table).
pub(crate) type RuleId = usize;

/// The process-wide rule table, built once on first use.
pub(crate) static RULE_TABLE: Lazy<RuleTable> = Lazy::new(|| RuleTable::new(crate::rules::get()));

#[derive(Debug)]
pub(crate) struct RuleTable {
    pub rules: Vec<Rule>,
    by_symbol: HashMap<char, RuleId>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        let by_symbol = rules.iter().enumerate().map(|(id, rule)| (rule.symbol, id)).collect();
        Self { rules, by_symbol }
    }

    pub fn lookup(&self, symbol: char) -> Option<&Rule> {
        self.by_symbol.get(&symbol).map(|&id| &self.rules[id])
    }
}

bitflags::bitflags! {
    /// Coarse character classes present in a string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CharClasses: u8 {
        /// ASCII digits (`9`, `#`).
        const DIGIT     = 1 << 0;
        /// ASCII letters (`A`, `#`).
        const LETTER    = 1 << 1;
        /// Characters that are literal mask symbols.
        const SEPARATOR = 1 << 2;
        /// Anything no mask symbol accepts.
        const OTHER     = 1 << 3;
    }
}

impl CharClasses {
    /// Classify every character of `input`.
    pub fn scan(input: &str) -> Self {
        input.chars().fold(Self::empty(), |acc, c| acc | Self::of(c))
    }

    /// Class of a single character.
    pub fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            Self::DIGIT
        } else if c.is_ascii_alphabetic() {
            Self::LETTER
        } else if RULE_TABLE.lookup(c).is_some_and(|r| r.kind == RuleKind::Literal) {
            Self::SEPARATOR
        } else {
            Self::OTHER
        }
    }
}

/// A mask resolved against the rule table.
#[derive(Debug, Clone)]
pub(crate) struct CompiledMask {
    pub rules: Vec<&'static Rule>,
}

impl CompiledMask {
    pub fn new(mask: &str) -> Result<Self, MaskError> {
        if mask.is_empty() {
            return Err(MaskError::EmptyMask);
        }

        let rules = mask
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                RULE_TABLE.lookup(symbol).ok_or(MaskError::UnknownSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    pub fn placeholder_count(&self) -> usize {
        self.rules.iter().filter(|r| r.is_placeholder()).count()
    }

    /// Union of the classes the mask's placeholders accept.
    pub fn placeholder_classes(&self) -> CharClasses {
        self.rules.iter().fold(CharClasses::empty(), |acc, r| acc | r.classes)
    }
}
