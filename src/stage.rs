//! Core normalization stage abstraction.
//!
//! A stage is one step of canonicalization. Every stage works on a
//! `Cow<str>`: when `needs_apply` says the text is already in the shape the
//! stage produces, the pipeline skips `apply` and the caller's borrow flows
//! through untouched. Only stages that actually change something allocate.
//!
//! Built-in stages, in the order the search pipeline runs them:
//!
//! 1. [`LowerCase`](lower_case::LowerCase)
//! 2. [`FoldToBase`](fold_to_base::FoldToBase) – language table
//! 3. [`RemoveDiacritics`](remove_diacritics::RemoveDiacritics) – NFD + strip
//! 4. [`Trim`](trim::Trim)

pub mod fold_to_base;
pub mod lower_case;
pub mod remove_diacritics;
pub mod trim;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    ///
    /// Must be exact: `true` iff `apply` would return different text.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without a preceding `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
