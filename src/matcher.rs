//! Flexible matching.
//!
//! A query is "found" in a target when either
//!
//! * the canonical target contains the canonical query, or
//! * the lower-cased target contains the lower-cased query.
//!
//! The two checks are independent; the literal one keeps exact-accent
//! queries working ("résumé" vs "resume") for text the canonical form
//! flattens. Containment is plain substring containment, so `"cat"` is found
//! in `"category"`. An empty target or query never matches.

use crate::{
    context::Context, lang::Lang, normalizer::Normalizer, process::Process, profile::preset,
};
use std::{borrow::Cow, fmt};

/// Which check found the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Diacritic-insensitive containment.
    Canonical,
    /// Case-insensitive containment with accents intact.
    Literal,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchKind::Canonical => "canonical",
            MatchKind::Literal => "literal",
        })
    }
}

/// Both comparison forms of one string, computed once.
///
/// Build keys for a list of café names up front and test every query
/// against them without re-normalizing the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKey {
    literal: String,
    canonical: String,
    empty: bool,
}

impl SearchKey {
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Whether the raw text was empty. A whitespace-only text is not empty
    /// even though its canonical form is.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Look for `query` inside `self`. Canonical containment is reported
    /// first when both checks succeed.
    pub fn find(&self, query: &SearchKey) -> Option<MatchKind> {
        if self.empty || query.empty {
            return None;
        }
        if canonical_contains(self, query) {
            Some(MatchKind::Canonical)
        } else if literal_contains(self, query) {
            Some(MatchKind::Literal)
        } else {
            None
        }
    }

    pub fn matches(&self, query: &SearchKey) -> bool {
        self.find(query).is_some()
    }
}

#[inline]
fn canonical_contains(target: &SearchKey, query: &SearchKey) -> bool {
    target.canonical.contains(query.canonical.as_str())
}

#[inline]
fn literal_contains(target: &SearchKey, query: &SearchKey) -> bool {
    target.literal.contains(query.literal.as_str())
}

/// Canonicalizes and matches with one configured [`Normalizer`].
pub struct Matcher {
    normalizer: Normalizer,
}

impl Default for Matcher {
    /// Vietnamese search pipeline.
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

impl Matcher {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Matcher over the search pipeline for `lang`.
    ///
    /// # Panics
    ///
    /// If `lang` is not one of the built-in languages (see [`crate::all_langs`]).
    pub fn for_lang(lang: Lang) -> Self {
        Self::new(Normalizer::search(lang))
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    fn ctx(&self) -> &Context {
        self.normalizer.context()
    }

    /// Canonical form of `text`. Never fails: if a stage errors, the text is
    /// trimmed and lower-cased instead and a warning is logged.
    pub fn canonicalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.normalizer.normalize(text) {
            Ok(canonical) => canonical,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    lang = self.ctx().lang.code(),
                    "canonicalization failed, falling back to lower-cased text"
                );
                Cow::Owned(text.trim().to_lowercase())
            }
        }
    }

    fn literal<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let profile = preset::literal();
        run_or_lowercase(&profile, text, self.ctx())
    }

    pub fn key(&self, text: &str) -> SearchKey {
        SearchKey {
            literal: self.literal(text).into_owned(),
            canonical: self.canonicalize(text).into_owned(),
            empty: text.is_empty(),
        }
    }

    pub fn find(&self, target: &str, query: &str) -> Option<MatchKind> {
        if target.is_empty() || query.is_empty() {
            return None;
        }
        self.key(target).find(&self.key(query))
    }

    pub fn matches(&self, target: &str, query: &str) -> bool {
        self.find(target, query).is_some()
    }

    /// Items whose `field` matches `query`, in input order. The query is
    /// normalized once; an empty query yields nothing.
    pub fn filter<'m, 'i, T, F>(
        &'m self,
        items: &'i [T],
        query: &str,
        field: F,
    ) -> impl Iterator<Item = &'i T> + use<'m, 'i, T, F>
    where
        F: Fn(&T) -> &str,
    {
        let query = self.key(query);
        items
            .iter()
            .filter(move |item| !query.empty && self.key(field(*item)).matches(&query))
    }
}

fn run_or_lowercase<'a, P: Process>(
    profile: &crate::profile::Profile<P>,
    text: &'a str,
    ctx: &Context,
) -> Cow<'a, str> {
    profile
        .run(Cow::Borrowed(text), ctx)
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "literal form failed, using str::to_lowercase");
            Cow::Owned(text.to_lowercase())
        })
}
