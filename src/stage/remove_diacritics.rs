//! src/stage/remove_diacritics.rs
//!
//! Generic diacritic removal: canonical decomposition (NFD) followed by
//! stripping the Combining Diacritical Marks block (U+0300–U+036F).

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::{contains_combining_diacritic, is_combining_diacritic},
};
use icu_normalizer::DecomposingNormalizerBorrowed;
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfd);

/// Removes accents left after table folding, and any accent on letters the
/// language table does not know about (`é`, `ñ`, `ö`, …).
///
/// # Normalization Form
///
/// Uses **NFD (Canonical Decomposition)** before filtering:
/// - Precomposed characters decomposed: `é` → `e` + combining acute
/// - **Ligatures preserved**: `ﬁ` remains `ﬁ` (no compatibility mapping)
/// - **Non-decomposing letters preserved**: `ø`, `ł`, `đ` have no canonical
///   decomposition and pass through unchanged
///
/// Anything NFD changes stays changed even when no mark is stripped
/// (Hangul syllables come out as conjoining jamo).
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(false);
        }
        Ok(contains_combining_diacritic(text) || !ICU4X_NFD.is_normalized(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let decomposed = ICU4X_NFD.normalize(&text);
        let out: String = decomposed
            .chars()
            .filter(|&c| !is_combining_diacritic(c))
            .collect();
        // U+034F has class 0 and blocks reordering; once it is gone the marks
        // around it may be out of canonical order.
        if ICU4X_NFD.is_normalized(&out) {
            Ok(Cow::Owned(out))
        } else {
            Ok(Cow::Owned(ICU4X_NFD.normalize(&out).into_owned()))
        }
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for RemoveDiacritics {
    fn samples(_lang: crate::lang::Lang) -> &'static [&'static str] {
        &[
            "café",
            "naïve",
            "e\u{0301}",
            "ﬁle",
            "hai bà trưng",
            "đà nẵng",
            "smørrebrød",
            "\u{05B1}\u{034F}\u{05B0}",
            "",
        ]
    }

    fn should_transform(_lang: crate::lang::Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("café", "cafe"),
            ("résumé", "resume"),
            ("hai bà trưng", "hai ba trung"),
            ("de\u{0302}\u{0323}p", "dep"),
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
