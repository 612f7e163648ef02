//! Diacritic-insensitive canonicalization and flexible matching for
//! Vietnamese search.
//!
//! ```
//! assert_eq!(khongdau::canonicalize("Hai Bà Trưng"), "hai ba trung");
//! assert!(khongdau::matches("Cà Phê Đà Nẵng", "da nang"));
//! ```

pub mod context;
pub mod lang;
pub mod matcher;
pub mod normalizer;
pub mod process;
pub mod profile;
pub mod stage;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::LazyLock;

pub use lang::{ENG, Lang, POL, VIE, all_langs};
pub use matcher::{MatchKind, Matcher, SearchKey};
pub use normalizer::{Normalizer, NormalizerBuilder, NormalizerError};
pub use stage::fold_to_base::FoldToBase;
pub use stage::lower_case::LowerCase;
pub use stage::remove_diacritics::RemoveDiacritics;
pub use stage::trim::Trim;

static DEFAULT_MATCHER: LazyLock<Matcher> = LazyLock::new(Matcher::default);

/// Lowercase, diacritic-free, trimmed search key for `text` (Vietnamese
/// rules). Total: the empty string maps to the empty string.
pub fn canonicalize(text: &str) -> String {
    DEFAULT_MATCHER.canonicalize(text).into_owned()
}

/// Whether `query` is found in `target`, ignoring case and, on the
/// canonical path, diacritics. Empty inputs never match.
pub fn matches(target: &str, query: &str) -> bool {
    DEFAULT_MATCHER.matches(target, query)
}
