pub mod data;

pub use data::{ENG, LANG_TABLE, POL, VIE, all_langs, from_code};

use phf::Map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

pub const DEFAULT_LANG: Lang = VIE;

/// Precomposed letter → plain base letter.
///
/// Keys are lowercase: the table is consulted after lower-casing. Entries
/// cover letters that canonical decomposition alone does not reduce to a
/// base letter (`đ`, `ł`) as well as every toned vowel, so the mapping does
/// not depend on the decomposition data shipped with the runtime.
pub type BaseLetterMap = Map<char, char>;

#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub base_letters: &'static BaseLetterMap,
}

impl LangEntry {
    #[inline(always)]
    pub fn has_base_letters(&self) -> bool {
        !self.base_letters.is_empty()
    }

    /// Base letter for `c`, or `None` when `c` is not in the table.
    #[inline(always)]
    pub fn base_letter(&self, c: char) -> Option<char> {
        if c.is_ascii() {
            return None;
        }
        self.base_letters.get(&c).copied()
    }

    #[inline]
    pub fn needs_base_fold(&self, text: &str) -> bool {
        self.has_base_letters()
            && !text.is_ascii()
            && text.chars().any(|c| self.base_letter(c).is_some())
    }

    /// Replace the base-letter table, e.g. from `Context::with_modified`.
    #[inline]
    pub fn set_base_letters(&mut self, base_letters: &'static BaseLetterMap) {
        self.base_letters = base_letters;
    }
}
