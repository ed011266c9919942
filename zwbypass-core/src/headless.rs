// zwbypass-core/src/headless.rs

//! `headless.rs`
//! One-shot helpers for running any mode over a single string without a UI.

use log::debug;

use crate::config::ObfuscationConfig;
use crate::engine::build_transform;
use crate::engines::detection::detect_zero_width_with;
use crate::errors::ZwError;
use crate::mode::Mode;
use crate::report::DetectionReport;

/// What a mode produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutput {
    /// The transformed string, ready for display or further encoding.
    Text(String),
    /// The detection report (detect mode only).
    Detection(DetectionReport),
}

/// Runs `mode` over `text` using the settings in `config`.
///
/// # Arguments
///
/// * `config` - Engine settings, already validated by the caller.
/// * `mode` - The operation to perform.
/// * `text` - The input string.
pub fn headless_transform_string(
    config: &ObfuscationConfig,
    mode: Mode,
    text: &str,
) -> Result<TransformOutput, ZwError> {
    debug!("Headless run: mode '{}', {} input codepoint(s).", mode, text.chars().count());
    if mode == Mode::Detect {
        return Ok(TransformOutput::Detection(detect_zero_width_with(text, config.show_hex)));
    }
    let engine = build_transform(mode, config)?;
    engine.transform(text).map(TransformOutput::Text)
}
