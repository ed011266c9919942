// zwbypass-core/src/lib.rs
//! # zwbypass Core Library
//!
//! `zwbypass-core` crafts and inspects strings that hide from literal keyword
//! matching. It inserts invisible zero-width characters between letters,
//! swaps letters for lookalike homoglyphs, finds zero-width characters that
//! are already present, and strips them back out with Unicode normalization.
//!
//! The library is pure and stateless: every operation takes a string and
//! returns a new one (or a report). Reading input, URL encoding, and writing
//! output are left to the caller.
//!
//! ## Modules
//!
//! * `config`: Defines `ObfuscationConfig` and its YAML loader.
//! * `engine`: Defines the `TextTransform` trait and `build_transform`.
//! * `engines`: Insertion, homoglyph, detection, and stripping algorithms.
//! * `mode`: The operation identifiers (`every`, `random`, ...).
//! * `report`: Detection results (`DetectionReport`, `ZeroWidthPosition`).
//! * `headless`: One-shot helper that runs any mode over a string.
//! * `errors`: The `ZwError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use zwbypass_core::{detect_zero_width, insert_uniform, strip_and_normalize, ZeroWidthKind};
//!
//! let hidden = insert_uniform("admin", ZeroWidthKind::Space, true, 1);
//! assert_eq!(hidden.chars().count(), 9);
//!
//! let report = detect_zero_width(&hidden);
//! assert_eq!(report.positions.len(), 4);
//! assert_eq!(report.positions[0].label, "U+200B ZERO WIDTH SPACE");
//!
//! assert_eq!(strip_and_normalize(&hidden, None), "admin");
//! ```
//!
//! ## Error Handling
//!
//! Only keyword-scoped insertion can fail at run time (`ZwError::EmptyKeywordList`).
//! Parsing identifiers and loading configuration report the remaining variants.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod mode;
pub mod report;

pub use config::{parse_zero_width_kind, ObfuscationConfig};
pub use errors::ZwError;
pub use engine::{build_transform, TextTransform};
pub use mode::Mode;
pub use report::{DetectionReport, ZeroWidthPosition};
pub use headless::{headless_transform_string, TransformOutput};

pub use engines::detection::{detect_zero_width, detect_zero_width_with};
pub use engines::homoglyph::{substitute_homoglyphs, HomoglyphEngine};
pub use engines::insertion::{
    clamp_probability,
    insert_keywords,
    insert_random,
    insert_random_with_rng,
    insert_uniform,
    split_every_boundary,
    KeywordEngine,
    RandomEngine,
    SeedPolicy,
    UniformEngine,
    DEFAULT_SEED,
};
pub use engines::strip::{strip_and_normalize, strip_zero_width, NormalizationForm, StripEngine};

/// Re-exports the character tables so callers need only this crate.
pub use zwbypass_charset::{is_zero_width, homoglyph_for, ZeroWidthKind};
