//! Table-driven folding of precomposed letters to their base letter.
//!
//! The table comes from `ctx.lang_entry.base_letters`, so the stage itself
//! carries no language data and a caller can install another alphabet's
//! table through `Context::with_modified`.

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// `à → a`, `ư → u`, `đ → d`, … for the context's language.
///
/// Expects lowercase input; uppercase letters are not table keys and pass
/// through (run `LowerCase` first).
pub struct FoldToBase;

impl Stage for FoldToBase {
    fn name(&self) -> &'static str {
        "fold_to_base"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.lang_entry.needs_base_fold(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !ctx.lang_entry.needs_base_fold(&text) {
            return Ok(text);
        }
        let entry = ctx.lang_entry;
        let out: String = text
            .chars()
            .map(|c| entry.base_letter(c).unwrap_or(c))
            .collect();
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for FoldToBase {
    fn samples(_lang: crate::lang::Lang) -> &'static [&'static str] {
        &[
            "hai bà trưng",
            "đà nẵng",
            "phở bò",
            "łódź",
            "ĐÀ NẴNG",
            "plain",
            "",
        ]
    }

    fn should_transform(lang: crate::lang::Lang) -> &'static [(&'static str, &'static str)] {
        match lang.code() {
            "VIE" => &[
                ("hai bà trưng", "hai ba trung"),
                ("đà nẵng", "da nang"),
                ("cà phê sữa đá", "ca phe sua da"),
                ("ỳ ý ỵ ỷ ỹ", "y y y y y"),
            ],
            "POL" => &[("łódź", "lódź")],
            _ => &[("hai bà trưng", "hai bà trưng")],
        }
    }
}
