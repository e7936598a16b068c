use crate::engine::{CharClasses, CompiledMask, StepTrace, Translator};
use crate::error::MaskError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Options that affect formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Keep synthesizing literal separators after the input runs out, up to the
    /// next placeholder. Off by default: output ends with the last input
    /// character that was aligned.
    ///
    /// Empty input still formats to an empty string.
    pub complete_literals: bool,
}

/// A mask compiled once and applied to any number of inputs.
///
/// # Example
/// ```
/// use maskfmt::Mask;
///
/// let cpf: Mask = "999.999.999-99".parse().unwrap();
/// assert_eq!(cpf.apply("48705796501"), "487.057.965-01");
/// assert_eq!(cpf.apply("487.057.965-01"), "487.057.965-01");
/// ```
#[derive(Debug, Clone)]
pub struct Mask {
    source: String,
    compiled: CompiledMask,
}

impl Mask {
    /// Compile `mask`, rejecting empty masks and symbols outside
    /// [`SYMBOLS`](crate::SYMBOLS).
    pub fn new(mask: &str) -> Result<Self, MaskError> {
        Ok(Self { source: mask.to_string(), compiled: CompiledMask::new(mask)? })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of mask positions (characters), an upper bound on output length.
    pub fn len(&self) -> usize {
        self.compiled.rules.len()
    }

    /// Always false: empty masks do not compile.
    pub fn is_empty(&self) -> bool {
        self.compiled.rules.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.compiled.placeholder_count()
    }

    /// Character classes any placeholder in this mask accepts.
    pub fn placeholder_classes(&self) -> CharClasses {
        self.compiled.placeholder_classes()
    }

    /// Format `input` with default [`Options`].
    pub fn apply(&self, input: &str) -> String {
        Translator::new(&self.compiled, input).run(&Options::default())
    }

    pub fn apply_with(&self, input: &str, options: &Options) -> FormatResult {
        let run = Translator::new(&self.compiled, input).run_with_metrics(options);
        FormatResult { output: run.output, elapsed: run.metrics.total }
    }

    /// Format `input` and return the step trace alongside the output.
    pub fn apply_verbose_with(&self, input: &str, options: &Options) -> FormatResultVerbose {
        let run = Translator::new(&self.compiled, input).run_with_metrics(options);
        let m = run.metrics;

        let details = FormatDetails {
            total: m.total,
            steps: run.steps,
            consumed: m.consumed,
            skipped: m.skipped,
            passed_through: m.passed_through,
            synthesized: m.synthesized,
            exhausted: m.exhausted,
            rewinds: m.rewinds,
            mask_classes: self.placeholder_classes(),
            input_classes: CharClasses::scan(input),
        };

        FormatResultVerbose { mask: self.source.clone(), input: input.to_string(), output: run.output, details }
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mask::new(s)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for Mask {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Mask {}

/// Result from [`format_with`].
#[derive(Debug, Clone)]
pub struct FormatResult {
    /// The formatted string.
    pub output: String,
    /// Time spent aligning the input.
    pub elapsed: Duration,
}

/// Additional details returned by [`format_verbose_with`].
///
/// Meant for debugging masks: one trace per mask position plus run counters.
#[derive(Debug, Clone)]
pub struct FormatDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// One entry per mask position, in mask order.
    pub steps: Vec<StepTrace>,
    pub consumed: usize,
    pub skipped: usize,
    pub passed_through: usize,
    pub synthesized: usize,
    pub exhausted: usize,
    pub rewinds: usize,
    /// Classes the mask's placeholders accept.
    pub mask_classes: CharClasses,
    /// Classes present in the input.
    pub input_classes: CharClasses,
}

/// Result from [`format_verbose_with`].
#[derive(Debug, Clone)]
pub struct FormatResultVerbose {
    pub mask: String,
    pub input: String,
    pub output: String,
    pub details: FormatDetails,
}

/// Format `input` against `mask` with default [`Options`].
///
/// # Example
/// ```
/// use maskfmt::format;
///
/// assert_eq!(format("99/99/9999", "25122023").unwrap(), "25/12/2023");
/// assert_eq!(format("999-999", "123").unwrap(), "123");
/// assert!(format("99x", "12").is_err());
/// ```
pub fn format(mask: &str, input: &str) -> Result<String, MaskError> {
    Ok(Mask::new(mask)?.apply(input))
}

/// Format `input` against `mask` with the provided `options`.
pub fn format_with(mask: &str, input: &str, options: &Options) -> Result<FormatResult, MaskError> {
    Ok(Mask::new(mask)?.apply_with(input, options))
}

/// Format `input` against `mask` and return the per-step trace.
///
/// The default [`format`] path does not allocate these traces.
pub fn format_verbose_with(mask: &str, input: &str, options: &Options) -> Result<FormatResultVerbose, MaskError> {
    Ok(Mask::new(mask)?.apply_verbose_with(input, options))
}
