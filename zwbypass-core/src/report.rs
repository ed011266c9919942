// zwbypass-core/src/report.rs
//! Data structures describing where zero-width characters were found.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use zwbypass_charset::ZeroWidthKind;

/// One zero-width occurrence, located by codepoint index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroWidthPosition {
    /// Codepoint offset in the inspected text.
    pub index: usize,
    pub kind: ZeroWidthKind,
    pub codepoint: u32,
    /// Human-readable label, e.g. `U+200B ZERO WIDTH SPACE`.
    pub label: String,
}

impl ZeroWidthPosition {
    pub fn new(index: usize, kind: ZeroWidthKind) -> Self {
        let codepoint = kind.as_char() as u32;
        Self {
            index,
            kind,
            codepoint,
            label: format!("U+{:04X} {}", codepoint, kind.unicode_name()),
        }
    }

    /// The bracketed tag used in visualizations: `[ZWSP]` or `[ZWSP](U+200B)`.
    pub fn tag(&self, show_hex: bool) -> String {
        let mut tag = format!("[{}]", self.kind.tag());
        if show_hex {
            let _ = write!(tag, "(U+{:04X})", self.codepoint);
        }
        tag
    }
}

/// Result of a detection pass.
///
/// An empty `positions` list is a normal outcome meaning the text is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// The input with each zero-width character replaced by its tag.
    pub visualization: String,
    /// Occurrences in strictly increasing index order.
    pub positions: Vec<ZeroWidthPosition>,
}

impl DetectionReport {
    pub fn is_clean(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn count_by_kind(&self) -> BTreeMap<ZeroWidthKind, usize> {
        let mut counts = BTreeMap::new();
        for p in &self.positions {
            *counts.entry(p.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize detection report")
    }
}
