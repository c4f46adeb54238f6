//! Core normalization stage abstraction.
//!
//! A NACO heading is normalized by four stages run in order:
//!
//! 1. [`FoldHeading`](fold_heading::FoldHeading) – the single left-to-right scan
//!    (compose, classify, comma policy, decomposition fallback, blank collapsing)
//! 2. [`Trim`](trim::Trim)
//! 3. [`UpperCase`](upper_case::UpperCase)
//! 4. [`StripTrailingComma`](strip_trailing_comma::StripTrailingComma)
//!
//! Every stage works on `Cow<str>` and hands the input back untouched when it
//! has nothing to do, so an already-normalized heading never allocates.

pub mod fold_heading;
pub mod strip_trailing_comma;
pub mod trim;
pub mod upper_case;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    /// Reported by caller-supplied stages; the NACO stages are infallible.
    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Exact pre-check: `Ok(true)` iff `apply` would change `text`.
    /// Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, and must hand
    /// `text` back unchanged when there is nothing to do.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
