use thiserror::Error;

/// Errors raised while compiling a mask.
///
/// Input problems are never errors: characters a placeholder rejects are
/// skipped, and running out of input truncates the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("mask is empty")]
    EmptyMask,

    /// `position` is the character index of `symbol` within the mask.
    #[error("unknown mask symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
}
