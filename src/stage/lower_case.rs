use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Locale-independent lower-casing (Unicode default case mapping).
///
/// Deliberately ignores `ctx.lang`: canonical keys must not depend on the
/// searcher's locale, so `I` is always `i`, never Turkish `ı`.
pub struct LowerCase;

#[inline(always)]
fn changes_case(c: char) -> bool {
    c.to_lowercase().next() != Some(c)
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(text.bytes().any(|b| b.is_ascii_uppercase()));
        }
        Ok(text.chars().any(changes_case))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        if text.is_ascii() {
            return Ok(Cow::Owned(text.to_ascii_lowercase()));
        }
        Ok(Cow::Owned(text.to_lowercase()))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for LowerCase {
    fn samples(_lang: crate::lang::Lang) -> &'static [&'static str] {
        &[
            "HAI BÀ TRƯNG",
            "Đà Nẵng",
            "CAFÉ",
            "ΟΔΥΣΣΕΥΣ",
            "İstanbul",
            "already lower",
            "",
        ]
    }

    fn should_transform(_lang: crate::lang::Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("Hai Bà Trưng", "hai bà trưng"),
            ("ĐÀ NẴNG", "đà nẵng"),
            ("CAFÉ", "café"),
            ("ABC", "abc"),
        ]
    }
}
