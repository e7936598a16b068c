//! Mask alignment engine.
//!
//! ## How the parts work together
//!
//! ```text
//! rules::get() ──▶ RULE_TABLE (once)          (compiled_mask.rs)
//!                       │
//! mask ── CompiledMask::new ── unknown symbol? ──▶ MaskError
//!                       │
//! input ── Cursor::new ─┤                       (cursor.rs)
//!                       v
//!              Translator::drive                (translator.rs)
//!                - evaluate(rule, cursor) per mask position (step.rs)
//!                - drop absent emissions, concatenate
//!                       │
//!                       v
//!              String (+ RunMetrics, StepTrace) (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `cursor.rs`: forward-only reader with the single-step rewind literals use.
//! - `compiled_mask.rs`: the static rule table, mask compilation and the
//!   `CharClasses` summary.
//! - `step.rs`: the placeholder and literal resolvers.
//! - `translator.rs`: the per-input driver.
//! - `metrics.rs`: counters and step traces for verbose runs.
//!
//! ## Debugging
//!
//! Set `MASKFMT_DEBUG_STEPS=1` to print a trace line per mask position.

#[path = "engine/compiled_mask.rs"]
mod compiled_mask;
#[path = "engine/cursor.rs"]
mod cursor;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/step.rs"]
mod step;
#[path = "engine/translator.rs"]
mod translator;

pub use compiled_mask::CharClasses;
pub(crate) use compiled_mask::CompiledMask;
pub use cursor::Cursor;
pub use step::{StepAction, StepTrace};
pub use translator::Translator;
