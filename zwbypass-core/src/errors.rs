//! errors.rs - Custom error types for the zwbypass-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types surfaced by `zwbypass-core`.
///
/// The transformation engines themselves only ever fail with
/// `EmptyKeywordList`; the remaining variants come from parsing
/// identifiers and loading configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ZwError {
    #[error("No keywords provided. Use --keywords 'admin,select,script' or --keywords @file")]
    EmptyKeywordList,

    #[error("Invalid mode '{0}'; expected one of: every, random, keywords, homoglyphs, detect, strip")]
    InvalidMode(String),

    #[error("Unknown zero-width kind '{0}'; expected one of: zwsp, zwnj, zwj")]
    UnknownZeroWidthKind(String),

    #[error("Unknown normalization form '{0}'; expected one of: nfc, nfd, nfkc, nfkd")]
    UnknownNormalizationForm(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
