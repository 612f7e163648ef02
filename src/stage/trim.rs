use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Strips leading and trailing Unicode whitespace (`str::trim`).
pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        Ok(Cow::Owned(text.trim().to_owned()))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Trim {
    fn samples(_lang: crate::lang::Lang) -> &'static [&'static str] {
        &["  hai ba trung  ", "\t\ncafe\r\n", "\u{3000}phở\u{00A0}", "inner  space", ""]
    }

    fn should_transform(_lang: crate::lang::Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("  hai ba trung  ", "hai ba trung"),
            ("\u{3000}phở\u{00A0}", "phở"),
            ("   ", ""),
        ]
    }
}
