mod prop_tests {
    use crate::{Normalizer, canonicalize, context::Context, matches, profile::preset};
    use proptest::prelude::*;
    use std::borrow::Cow;
    use unicode_normalization::UnicodeNormalization;

    const VIETNAMESE: &str = "[a-zA-Z àáạảãâầấậẩẫăằắặẳẵèéẹẻẽêềếệểễìíịỉĩòóọỏõôồốộổỗơờớợởỡùúụủũưừứựửữỳýỵỷỹđĐÀÁẠẢÃÂĂÈÉÊÌÍÒÓÔƠÙÚƯỲÝ]{0,64}";

    const VIETNAMESE_LOWER: &str = "[a-zàáạảãâầấậẩẫăằắặẳẵèéẹẻẽêềếệểễìíịỉĩòóọỏõôồốộổỗơờớợởỡùúụủũưừứựửữỳýỵỷỹđ]{1,16}";

    // Base letters interleaved with marks of several combining classes,
    // including U+034F (class 0) and Hebrew points outside the stripped block.
    const STACKED_MARKS: &str =
        r"[a-zA-Zđư \x{05B0}-\x{05B9}\x{0591}-\x{05AF}\x{0300}-\x{036F}\x{1DC0}-\x{1DFF}\x{0610}-\x{061A}\x{20D0}-\x{20F0}]{0,64}";

    proptest! {
        #[test]
        fn canonicalize_idempotent_with_stacked_marks(s in STACKED_MARKS) {
            let once = canonicalize(&s);
            let twice = canonicalize(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn no_stripped_marks_with_stacked_marks(s in STACKED_MARKS) {
            let out = canonicalize(&s);
            let has_mark = out.chars().any(crate::unicode::is_combining_diacritic);
            prop_assert!(!has_mark, "mark left in {:?}", out);
        }

        #[test]
        fn canonicalize_idempotent(s in "\\PC{0,200}") {
            let once = canonicalize(&s);
            let twice = canonicalize(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn canonicalize_idempotent_vietnamese(s in VIETNAMESE) {
            let once = canonicalize(&s);
            prop_assert_eq!(canonicalize(&once), once);
        }

        #[test]
        fn vietnamese_letters_reduce_to_ascii(s in VIETNAMESE) {
            let out = canonicalize(&s);
            prop_assert!(out.is_ascii(), "`{}` → `{}`", s, out);
            prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
        }

        #[test]
        fn no_combining_marks_or_outer_whitespace(s in "\\PC{0,200}") {
            let out = canonicalize(&s);
            let has_mark = out.chars().any(crate::unicode::is_combining_diacritic);
            prop_assert!(!has_mark, "mark left in {:?}", out);
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn never_longer_than_decomposed_lowercase(s in "\\PC{0,200}") {
            let decomposed: String = s.to_lowercase().nfd().collect();
            prop_assert!(canonicalize(&s).chars().count() <= decomposed.chars().count());
        }

        #[test]
        fn static_and_dynamic_pipelines_agree(s in "\\PC{0,200}") {
            let ctx = Context::default();
            let via_profile = preset::search_key().run(Cow::Borrowed(s.as_str()), &ctx).unwrap().into_owned();
            let via_normalizer = Normalizer::default().normalize(&s).unwrap().into_owned();
            prop_assert_eq!(via_profile, via_normalizer);
        }

        #[test]
        fn matches_is_reflexive(s in "\\PC{1,100}") {
            prop_assert!(matches(&s, &s));
        }

        #[test]
        fn empty_never_matches(s in "\\PC{0,100}") {
            prop_assert!(!matches("", &s));
            prop_assert!(!matches(&s, ""));
        }

        #[test]
        fn literal_substring_always_matches(
            prefix in VIETNAMESE,
            needle in VIETNAMESE_LOWER,
            suffix in VIETNAMESE,
        ) {
            let target = format!("{prefix}{needle}{suffix}");
            prop_assert!(matches(&target, &needle));
        }

        #[test]
        fn clean_ascii_is_zero_copy(s in "[a-z0-9]([a-z0-9 ]{0,60}[a-z0-9])?") {
            let n = Normalizer::default();
            let input = s.as_str();
            let out = n.normalize(input).unwrap();
            prop_assert!(matches!(out, Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
        }
    }
}
