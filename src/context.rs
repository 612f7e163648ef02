// src/context.rs
// Single source of truth for language configuration in hot paths.
// Tiny, Copy, and holds only 'static data.

use crate::lang::{DEFAULT_LANG, LANG_TABLE, Lang, LangEntry};

/// Runtime context passed to every stage.
///
/// - `lang`: human identifier (logging, debugging)
/// - `lang_entry`: the rules actually consulted by the stages
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub lang: Lang,
    pub lang_entry: LangEntry,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    /// Create a context using the canonical static data for a language.
    ///
    /// # Panics
    ///
    /// If `lang` has no entry in the language table. The built-in constants
    /// always do; a hand-built `Lang` with an unknown code does not.
    #[inline(always)]
    pub fn new(lang: Lang) -> Self {
        let lang_entry = LANG_TABLE
            .get(lang.code())
            .copied()
            .expect("language not present in LANG_TABLE – this is a bug");
        Self { lang, lang_entry }
    }

    /// Create a context and let the caller mutate the entry before use.
    /// Backs `NormalizerBuilder::modify_lang`.
    #[inline(always)]
    pub fn with_modified(lang: Lang, f: impl FnOnce(&mut LangEntry)) -> Self {
        let mut ctx = Self::new(lang);
        f(&mut ctx.lang_entry);
        ctx
    }
}
