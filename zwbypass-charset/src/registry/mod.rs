// zwbypass-charset/src/registry/mod.rs
//! The zero-width registry.
//!
//! Every supported zero-width character is listed exactly once in
//! [`ZERO_WIDTH_REGISTRY`]. Both the name lookup and the membership test are
//! derived from that single table, so the forward map and the membership set
//! can never disagree.

use core::fmt;
use core::str::FromStr;

/// The zero-width characters this tool can inject, detect, and strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroWidthKind {
    /// U+200B ZERO WIDTH SPACE.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "zwsp"))]
    Space,
    /// U+200C ZERO WIDTH NON-JOINER.
    #[cfg_attr(feature = "serde", serde(rename = "zwnj"))]
    NonJoiner,
    /// U+200D ZERO WIDTH JOINER.
    #[cfg_attr(feature = "serde", serde(rename = "zwj"))]
    Joiner,
}

/// Identifier → character table. Single source of truth for the registry.
pub const ZERO_WIDTH_REGISTRY: [(&str, char); 3] = [
    ("zwsp", '\u{200B}'),
    ("zwnj", '\u{200C}'),
    ("zwj", '\u{200D}'),
];

impl ZeroWidthKind {
    pub const ALL: [ZeroWidthKind; 3] = [
        ZeroWidthKind::Space,
        ZeroWidthKind::NonJoiner,
        ZeroWidthKind::Joiner,
    ];

    fn slot(self) -> usize {
        match self {
            ZeroWidthKind::Space => 0,
            ZeroWidthKind::NonJoiner => 1,
            ZeroWidthKind::Joiner => 2,
        }
    }

    /// Short identifier used on the command line and in config files.
    pub fn id(self) -> &'static str {
        ZERO_WIDTH_REGISTRY[self.slot()].0
    }

    /// The codepoint this kind stands for.
    pub fn as_char(self) -> char {
        ZERO_WIDTH_REGISTRY[self.slot()].1
    }

    /// Upper-case tag rendered by the detector, e.g. `ZWSP`.
    pub fn tag(self) -> &'static str {
        match self {
            ZeroWidthKind::Space => "ZWSP",
            ZeroWidthKind::NonJoiner => "ZWNJ",
            ZeroWidthKind::Joiner => "ZWJ",
        }
    }

    /// The character's name from the Unicode Character Database.
    pub fn unicode_name(self) -> &'static str {
        match self {
            ZeroWidthKind::Space => "ZERO WIDTH SPACE",
            ZeroWidthKind::NonJoiner => "ZERO WIDTH NON-JOINER",
            ZeroWidthKind::Joiner => "ZERO WIDTH JOINER",
        }
    }

    /// Reverse lookup: which kind, if any, is `c`.
    pub fn from_char(c: char) -> Option<Self> {
        ZERO_WIDTH_REGISTRY
            .iter()
            .position(|&(_, zw)| zw == c)
            .map(|slot| Self::ALL[slot])
    }
}

/// Membership test against the registry.
pub fn is_zero_width(c: char) -> bool {
    ZERO_WIDTH_REGISTRY.iter().any(|&(_, zw)| zw == c)
}

impl fmt::Display for ZeroWidthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when an identifier does not name a registered zero-width kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownZeroWidthKind;

impl fmt::Display for UnknownZeroWidthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zero-width kind; expected one of: zwsp, zwnj, zwj")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownZeroWidthKind {}

impl FromStr for ZeroWidthKind {
    type Err = UnknownZeroWidthKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ZERO_WIDTH_REGISTRY
            .iter()
            .position(|&(id, _)| id.eq_ignore_ascii_case(s))
            .map(|slot| Self::ALL[slot])
            .ok_or(UnknownZeroWidthKind)
    }
}
