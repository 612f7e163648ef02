//! Character-class helpers shared by the stages.

/// Combining Diacritical Marks block (U+0300–U+036F).
///
/// Only this block is stripped. Marks from the extended blocks
/// (U+1AB0, U+1DC0, U+20D0, U+FE20) and script-specific marks survive.
#[inline(always)]
pub const fn is_combining_diacritic(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F)
}

#[inline]
pub fn contains_combining_diacritic(text: &str) -> bool {
    // Every mark in the block encodes as 0xCC 0x80..=0xCD 0xAF.
    text.bytes().any(|b| b == 0xCC || b == 0xCD) && text.chars().any(is_combining_diacritic)
}
