// zwbypass-core/src/engines/detection.rs
//! Zero-width detection and visualization.

use log::debug;

use zwbypass_charset::ZeroWidthKind;

use crate::report::{DetectionReport, ZeroWidthPosition};

/// Scans `text`, tagging each zero-width character with its kind and codepoint.
pub fn detect_zero_width(text: &str) -> DetectionReport {
    detect_zero_width_with(text, true)
}

/// Scans `text`; `show_hex` controls the `(U+XXXX)` suffix on each tag.
pub fn detect_zero_width_with(text: &str, show_hex: bool) -> DetectionReport {
    let mut visualization = String::with_capacity(text.len());
    let mut positions = Vec::new();

    for (index, ch) in text.chars().enumerate() {
        match ZeroWidthKind::from_char(ch) {
            Some(kind) => {
                let position = ZeroWidthPosition::new(index, kind);
                visualization.push_str(&position.tag(show_hex));
                positions.push(position);
            }
            None => visualization.push(ch),
        }
    }

    debug!("Detection found {} zero-width character(s).", positions.len());
    DetectionReport { visualization, positions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        let report = detect_zero_width("plain text, ñ and ü");
        assert!(report.is_clean());
        assert_eq!(report.visualization, "plain text, ñ and ü");
    }

    #[test]
    fn test_single_zwsp() {
        let report = detect_zero_width("adm\u{200B}in");
        assert_eq!(report.visualization, "adm[ZWSP](U+200B)in");
        assert_eq!(report.positions.len(), 1);
        assert_eq!(report.positions[0].index, 3);
        assert_eq!(report.positions[0].label, "U+200B ZERO WIDTH SPACE");
    }

    #[test]
    fn test_mixed_kinds_without_hex() {
        let report = detect_zero_width_with("\u{200C}é\u{200D}\u{200B}", false);
        assert_eq!(report.visualization, "[ZWNJ]é[ZWJ][ZWSP]");
        let indices: Vec<usize> = report.positions.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        let kinds: Vec<ZeroWidthKind> = report.positions.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![ZeroWidthKind::NonJoiner, ZeroWidthKind::Joiner, ZeroWidthKind::Space]);
    }

    #[test]
    fn test_unregistered_invisible_chars_ignored() {
        let report = detect_zero_width("a\u{2060}b\u{FEFF}");
        assert!(report.is_clean());
    }
}
