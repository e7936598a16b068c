use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

pub use api::{FormatDetails, FormatResult, FormatResultVerbose, Mask, Options, format, format_verbose_with, format_with};
pub use engine::{CharClasses, Cursor, StepAction, StepTrace};
pub use error::MaskError;
pub use rules::{SYMBOLS, is_mask_symbol};

// --- Internal types ---------------------------------------------------------

/// How a mask symbol treats the input cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RuleKind {
    /// Requires one validated input character; invalid characters are skipped.
    Placeholder,
    /// Fixed separator: passed through when the input already has it, otherwise
    /// synthesized without consuming input.
    Literal,
}

/// One entry of the rule table: a mask symbol, the anchored regex that
/// validates a single input character against it, and its kind.
///
/// Patterns are stored as static references (created via the `regex!` helper
/// macro in `src/macros.rs`). `classes` must cover exactly the characters
/// `pattern` accepts; it is empty for literals.
pub(crate) struct Rule {
    pub symbol: char,
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub kind: RuleKind,
    pub classes: CharClasses,
}

impl Rule {
    /// Returns true when `c` satisfies this rule's validation pattern.
    pub fn accepts(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.pattern.is_match(c.encode_utf8(&mut buf))
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == RuleKind::Placeholder
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("symbol", &self.symbol)
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("kind", &self.kind)
            .field("classes", &self.classes)
            .finish()
    }
}

#[cfg(not(feature = "tracing"))]
static DEBUG_STEPS: once_cell::sync::Lazy<bool> =
    once_cell::sync::Lazy::new(|| std::env::var_os("MASKFMT_DEBUG_STEPS").is_some());

/// Whether `MASKFMT_DEBUG_STEPS` was set when the first trace point ran.
#[cfg(not(feature = "tracing"))]
pub(crate) fn debug_steps_enabled() -> bool {
    *DEBUG_STEPS
}
