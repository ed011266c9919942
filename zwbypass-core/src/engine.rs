// zwbypass-core/src/engine.rs
//! Defines the `TextTransform` trait shared by every string-to-string engine.
//!
//! Each transforming mode (every, random, keywords, homoglyphs, strip) has a
//! small engine struct that captures its parameters and implements this trait,
//! so callers can pick an engine once and run it over many inputs. Detection
//! returns a report rather than a string and lives outside the trait.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::ObfuscationConfig;
use crate::engines::homoglyph::HomoglyphEngine;
use crate::engines::insertion::{KeywordEngine, RandomEngine, UniformEngine};
use crate::engines::strip::StripEngine;
use crate::errors::ZwError;
use crate::mode::Mode;

/// A pure transformation from one string to another.
pub trait TextTransform: Send + Sync {
    /// The mode identifier this engine implements (e.g. `"every"`).
    fn name(&self) -> &'static str;

    /// Produces the transformed text. The input is never modified.
    fn transform(&self, text: &str) -> Result<String, ZwError>;
}

/// Builds the engine for `mode` from the settings in `config`.
///
/// Fails with `InvalidMode` for [`Mode::Detect`], which has no string output.
pub fn build_transform(mode: Mode, config: &ObfuscationConfig) -> Result<Box<dyn TextTransform>, ZwError> {
    debug!("Building '{}' engine.", mode);
    let engine: Box<dyn TextTransform> = match mode {
        Mode::Every => Box::new(UniformEngine {
            kind: config.zero_width,
            alnum_only: config.alnum_only,
            every_n: config.every_n,
        }),
        Mode::Random => Box::new(RandomEngine {
            kind: config.zero_width,
            alnum_only: config.alnum_only,
            probability: config.probability,
            seed: config.seed_policy(),
        }),
        Mode::Keywords => Box::new(KeywordEngine {
            kind: config.zero_width,
            keywords: config.keywords.clone(),
            case_sensitive: config.case_sensitive,
        }),
        Mode::Homoglyphs => Box::new(HomoglyphEngine),
        Mode::Strip => Box::new(StripEngine {
            form: config.normalization,
        }),
        Mode::Detect => return Err(ZwError::InvalidMode(mode.to_string())),
    };
    Ok(engine)
}
