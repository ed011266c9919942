//! Configuration management for `zwbypass-core`.
//!
//! `ObfuscationConfig` gathers every tunable the engines accept. It can be
//! loaded from a YAML file, with each omitted field falling back to the same
//! default the command line uses.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use zwbypass_charset::ZeroWidthKind;

use crate::engines::insertion::{clamp_probability, SeedPolicy, DEFAULT_SEED};
use crate::engines::strip::NormalizationForm;
use crate::errors::ZwError;

/// Settings shared by all modes. Each mode reads only the fields it needs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObfuscationConfig {
    /// Character injected by the insertion modes.
    pub zero_width: ZeroWidthKind,
    /// Restrict insertion to boundaries between two alphanumeric characters.
    pub alnum_only: bool,
    /// Insert after every Nth boundary (`every` mode). Must be at least 1.
    pub every_n: usize,
    /// Per-boundary insertion chance (`random` mode).
    pub probability: f64,
    /// Seed for `random` mode when `nondeterministic` is false.
    pub seed: u64,
    /// Seed `random` mode from the OS instead of `seed`.
    pub nondeterministic: bool,
    /// Keywords for `keywords` mode, processed in order.
    pub keywords: Vec<String>,
    pub case_sensitive: bool,
    /// Form applied by `strip` mode; `None` disables normalization.
    pub normalization: Option<NormalizationForm>,
    /// Append `(U+XXXX)` to detection tags.
    pub show_hex: bool,
}

impl Default for ObfuscationConfig {
    fn default() -> Self {
        Self {
            zero_width: ZeroWidthKind::Space,
            alnum_only: true,
            every_n: 1,
            probability: 0.5,
            seed: DEFAULT_SEED,
            nondeterministic: false,
            keywords: Vec::new(),
            case_sensitive: false,
            normalization: Some(NormalizationForm::Nfkc),
            show_hex: true,
        }
    }
}

impl ObfuscationConfig {
    /// Loads and validates a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: ObfuscationConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid settings in config file {}", path.display()))?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Rejects values no engine can honour and clamps the probability into `[0, 1]`.
    pub fn validate(&mut self) -> Result<(), ZwError> {
        if self.every_n == 0 {
            return Err(ZwError::InvalidConfig("every_n must be at least 1".to_string()));
        }
        if !self.probability.is_finite() {
            return Err(ZwError::InvalidConfig(format!(
                "probability must be a finite number, got {}",
                self.probability
            )));
        }
        let clamped = clamp_probability(self.probability);
        if clamped != self.probability {
            debug!("Probability {} is outside [0, 1]; clamped to {}.", self.probability, clamped);
            self.probability = clamped;
        }
        let before = self.keywords.len();
        self.keywords.retain(|k| !k.trim().is_empty());
        if self.keywords.len() != before {
            debug!("Dropped {} blank keyword(s).", before - self.keywords.len());
        }
        Ok(())
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        if self.nondeterministic {
            SeedPolicy::Entropy
        } else {
            SeedPolicy::Fixed(self.seed)
        }
    }
}

/// Parses a zero-width identifier (`zwsp`, `zwnj`, `zwj`), keeping the rejected text in the error.
pub fn parse_zero_width_kind(value: &str) -> Result<ZeroWidthKind, ZwError> {
    value
        .parse::<ZeroWidthKind>()
        .map_err(|_| ZwError::UnknownZeroWidthKind(value.trim().to_string()))
}
