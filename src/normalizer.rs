use thiserror::Error;

use crate::{
    FoldToBase, LowerCase, RemoveDiacritics, Trim,
    context::Context,
    lang::{DEFAULT_LANG, Lang, LangEntry},
    process::{DynProcess, Process},
    profile::{Profile, ProfileError},
    stage::{Stage, StageError},
};
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// A runtime-configured pipeline bound to one language context.
///
/// ```
/// use khongdau::{Normalizer, VIE};
///
/// let n = Normalizer::builder().lang(VIE).search_stages().build();
/// assert_eq!(n.normalize("Hai Bà Trưng").unwrap(), "hai ba trung");
/// ```
pub struct Normalizer {
    ctx: Context,
    pipeline: DynProcess,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// The canonical search pipeline for `lang`.
    ///
    /// # Panics
    ///
    /// If `lang` is not one of the built-in languages (see [`crate::all_langs`]).
    pub fn search(lang: Lang) -> Self {
        Self::builder().lang(lang).search_stages().build()
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pipeline.stage_names()
    }

    pub fn normalize<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, NormalizerError> {
        let result = self.pipeline.process(Cow::Borrowed(text), &self.ctx)?;
        Ok(result)
    }

    /// Run a static profile with this normalizer's language context.
    pub fn normalize_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: &'a str,
    ) -> Result<Cow<'a, str>, NormalizerError> {
        let result = profile.run(Cow::Borrowed(text), &self.ctx)?;
        Ok(result)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::search(DEFAULT_LANG)
    }
}

pub struct NormalizerBuilder {
    ctx: Context,
    pipeline: DynProcess,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self {
            ctx: Context::new(DEFAULT_LANG),
            pipeline: DynProcess::new(),
        }
    }
}

impl NormalizerBuilder {
    /// Select the language. Resets any earlier `modify_lang` override.
    pub fn lang(mut self, lang: Lang) -> Self {
        self.ctx = Context::new(lang);
        self
    }

    /// Adjust the language rules in place, e.g. to install another
    /// base-letter table.
    pub fn modify_lang(mut self, f: impl FnOnce(&mut LangEntry)) -> Self {
        f(&mut self.ctx.lang_entry);
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.pipeline.push_arc(Arc::new(stage));
        self
    }

    /// Append the canonical search stages in their required order.
    pub fn search_stages(self) -> Self {
        self.add_stage(LowerCase)
            .add_stage(FoldToBase)
            .add_stage(RemoveDiacritics)
            .add_stage(Trim)
    }

    pub fn build(self) -> Normalizer {
        tracing::debug!(
            lang = self.ctx.lang.code(),
            stages = self.pipeline.len(),
            "normalizer built"
        );
        Normalizer {
            ctx: self.ctx,
            pipeline: self.pipeline,
        }
    }
}
