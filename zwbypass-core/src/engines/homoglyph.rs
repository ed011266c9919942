// zwbypass-core/src/engines/homoglyph.rs
//! Homoglyph substitution: swaps table letters for non-Latin lookalikes.

use log::debug;

use zwbypass_charset::homoglyph_for;

use crate::engine::TextTransform;
use crate::errors::ZwError;

/// Replaces every character that has a table entry; all others pass through.
pub fn substitute_homoglyphs(text: &str) -> String {
    let mut swapped = 0usize;
    let out: String = text
        .chars()
        .map(|c| match homoglyph_for(c) {
            Some(sub) => {
                swapped += 1;
                sub
            }
            None => c,
        })
        .collect();
    debug!("Substituted {} homoglyph(s).", swapped);
    out
}

/// Engine for the `homoglyphs` mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomoglyphEngine;

impl TextTransform for HomoglyphEngine {
    fn name(&self) -> &'static str {
        "homoglyphs"
    }

    fn transform(&self, text: &str) -> Result<String, ZwError> {
        Ok(substitute_homoglyphs(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script() {
        let out = substitute_homoglyphs("script");
        assert_eq!(out, "s\u{0441}r\u{0456}\u{0440}\u{0442}");
        assert_eq!(out.chars().count(), 6);
        assert_eq!(out.chars().filter(|c| !c.is_ascii()).count(), 4);
        assert!(out.starts_with('s'));
        assert_eq!(out.chars().nth(2), Some('r'));
    }

    #[test]
    fn test_unmapped_passthrough() {
        assert_eq!(substitute_homoglyphs("123 = ?"), "123 = ?");
        assert_eq!(substitute_homoglyphs(""), "");
        assert_eq!(substitute_homoglyphs("\u{200B}"), "\u{200B}");
    }

    #[test]
    fn test_uppercase_entries() {
        assert_eq!(substitute_homoglyphs("POST"), "\u{0420}\u{039F}S\u{03A4}");
    }
}
