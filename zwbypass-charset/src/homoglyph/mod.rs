// zwbypass-charset/src/homoglyph/mod.rs
//! A modest table of Latin letters and their Cyrillic/Greek lookalikes.
//!
//! Only substitutions that render near-identically in common fonts are listed.

/// Source letter → lookalike, sorted by source codepoint for binary search.
pub const HOMOGLYPHS: [(char, char); 21] = [
    ('B', '\u{0392}'), // Greek Beta
    ('E', '\u{0395}'), // Greek Epsilon
    ('H', '\u{0397}'), // Greek Eta
    ('K', '\u{039A}'), // Greek Kappa
    ('M', '\u{039C}'), // Greek Mu
    ('O', '\u{039F}'), // Greek Omicron
    ('P', '\u{0420}'), // Cyrillic Er
    ('T', '\u{03A4}'), // Greek Tau
    ('X', '\u{03A7}'), // Greek Chi
    ('a', '\u{0430}'), // Cyrillic a
    ('c', '\u{0441}'), // Cyrillic es
    ('e', '\u{0435}'), // Cyrillic ie
    ('h', '\u{04BB}'), // Cyrillic shha
    ('i', '\u{0456}'), // Cyrillic byelorussian-ukrainian i
    ('k', '\u{03BA}'), // Greek kappa
    ('m', '\u{043C}'), // Cyrillic em
    ('o', '\u{03BF}'), // Greek omicron
    ('p', '\u{0440}'), // Cyrillic er
    ('t', '\u{0442}'), // Cyrillic te
    ('x', '\u{0445}'), // Cyrillic ha
    ('y', '\u{0443}'), // Cyrillic u
];

/// Looks up the substitute for `c`, if the table has one.
pub fn homoglyph_for(c: char) -> Option<char> {
    HOMOGLYPHS
        .binary_search_by_key(&c, |&(src, _)| src)
        .ok()
        .map(|idx| HOMOGLYPHS[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::is_zero_width;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in HOMOGLYPHS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} must sort before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_substitutes_are_non_ascii_and_visible() {
        for &(src, dst) in HOMOGLYPHS.iter() {
            assert!(src.is_ascii_alphabetic());
            assert!(!dst.is_ascii());
            assert!(!is_zero_width(dst));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(homoglyph_for('a'), Some('\u{0430}'));
        assert_eq!(homoglyph_for('P'), Some('\u{0420}'));
        assert_eq!(homoglyph_for('s'), None);
        assert_eq!(homoglyph_for('A'), None);
        assert_eq!(homoglyph_for('\u{200B}'), None);
    }
}
