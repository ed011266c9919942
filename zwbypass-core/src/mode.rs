// zwbypass-core/src/mode.rs
//! Operation identifiers accepted by the tool.

use std::fmt;
use std::str::FromStr;

use crate::errors::ZwError;

/// The operation to run over the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Insert at every Nth eligible boundary.
    #[default]
    Every,
    /// Insert at eligible boundaries with a fixed probability.
    Random,
    /// Split only the listed keywords.
    Keywords,
    /// Swap letters for lookalikes.
    Homoglyphs,
    /// Visualize and locate zero-width characters.
    Detect,
    /// Remove zero-width characters and normalize.
    Strip,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Every,
        Mode::Random,
        Mode::Keywords,
        Mode::Homoglyphs,
        Mode::Detect,
        Mode::Strip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Every => "every",
            Mode::Random => "random",
            Mode::Keywords => "keywords",
            Mode::Homoglyphs => "homoglyphs",
            Mode::Detect => "detect",
            Mode::Strip => "strip",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ZwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ZwError::InvalidMode(s.to_string()))
    }
}
