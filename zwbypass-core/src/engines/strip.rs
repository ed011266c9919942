// zwbypass-core/src/engines/strip.rs
//! Zero-width removal followed by optional Unicode normalization.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use zwbypass_charset::is_zero_width;

use crate::engine::TextTransform;
use crate::errors::ZwError;

/// A standard Unicode normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    Nfc,
    Nfd,
    /// Compatibility composition; folds full-width forms, ligatures, and similar.
    #[default]
    Nfkc,
    Nfkd,
}

impl NormalizationForm {
    pub fn apply(self, text: &str) -> String {
        match self {
            NormalizationForm::Nfc => text.nfc().collect(),
            NormalizationForm::Nfd => text.nfd().collect(),
            NormalizationForm::Nfkc => text.nfkc().collect(),
            NormalizationForm::Nfkd => text.nfkd().collect(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkc => "NFKC",
            NormalizationForm::Nfkd => "NFKD",
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationForm {
    type Err = ZwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nfc" => Ok(NormalizationForm::Nfc),
            "nfd" => Ok(NormalizationForm::Nfd),
            "nfkc" => Ok(NormalizationForm::Nfkc),
            "nfkd" => Ok(NormalizationForm::Nfkd),
            _ => Err(ZwError::UnknownNormalizationForm(s.to_string())),
        }
    }
}

/// Removes every registered zero-width character, leaving all others untouched.
pub fn strip_zero_width(text: &str) -> String {
    text.chars().filter(|&c| !is_zero_width(c)).collect()
}

/// Strips zero-width characters, then applies `form` if one is given.
pub fn strip_and_normalize(text: &str, form: Option<NormalizationForm>) -> String {
    let cleaned = strip_zero_width(text);
    debug!(
        "Stripped {} zero-width character(s).",
        text.chars().count() - cleaned.chars().count()
    );
    match form {
        Some(form) => form.apply(&cleaned),
        None => cleaned,
    }
}

/// Engine for the `strip` mode.
#[derive(Debug, Clone, Copy)]
pub struct StripEngine {
    pub form: Option<NormalizationForm>,
}

impl Default for StripEngine {
    fn default() -> Self {
        Self { form: Some(NormalizationForm::default()) }
    }
}

impl TextTransform for StripEngine {
    fn name(&self) -> &'static str {
        "strip"
    }

    fn transform(&self, text: &str) -> Result<String, ZwError> {
        Ok(strip_and_normalize(text, self.form))
    }
}
