// zwbypass-core/src/engines/insertion.rs
//! Zero-width insertion at interior character boundaries.
//!
//! Three strategies share the same rule: a zero-width character may only go
//! *between* two characters, never before the first or after the last. All
//! positions are codepoint offsets.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zwbypass_charset::{is_eligible_boundary, ZeroWidthKind};

use crate::engine::TextTransform;
use crate::errors::ZwError;

/// Seed used when the caller does not ask for anything else.
pub const DEFAULT_SEED: u64 = 1337;

/// Where the random engine's generator gets its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Reproducible output: identical input, probability, and seed give identical output.
    Fixed(u64),
    /// Seeded from the operating system; output differs between runs.
    Entropy,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::Fixed(DEFAULT_SEED)
    }
}

impl SeedPolicy {
    /// Creates a fresh generator owned by a single call.
    pub fn rng(self) -> StdRng {
        match self {
            SeedPolicy::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedPolicy::Entropy => StdRng::from_os_rng(),
        }
    }
}

/// Clamps a probability into `[0, 1]`. NaN becomes 0.
pub fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

/// Inserts `kind` after boundary `i` whenever the boundary is eligible and `(i + 1) % every_n == 0`.
///
/// `every_n` of 0 is treated as 1.
pub fn insert_uniform(text: &str, kind: ZeroWidthKind, alnum_only: bool, every_n: usize) -> String {
    let every_n = every_n.max(1);
    let zw = kind.as_char();
    let mut out = String::with_capacity(text.len() * 2);
    let mut inserted = 0usize;

    let mut chars = text.chars().enumerate().peekable();
    while let Some((i, ch)) = chars.next() {
        out.push(ch);
        if let Some(&(_, next)) = chars.peek() {
            if is_eligible_boundary(ch, next, alnum_only) && (i + 1) % every_n == 0 {
                out.push(zw);
                inserted += 1;
            }
        }
    }

    debug!("Uniform insertion placed {} {} character(s) (every_n = {}).", inserted, kind, every_n);
    out
}

/// Splits `text` at every interior boundary regardless of character class.
pub fn split_every_boundary(text: &str, kind: ZeroWidthKind) -> String {
    insert_uniform(text, kind, false, 1)
}

/// Inserts `kind` at each eligible boundary with independent probability `probability`.
///
/// The generator is built from `seed` for this call only, so two calls with
/// the same `SeedPolicy::Fixed` value produce the same output.
pub fn insert_random(
    text: &str,
    kind: ZeroWidthKind,
    alnum_only: bool,
    probability: f64,
    seed: SeedPolicy,
) -> String {
    let mut rng = seed.rng();
    insert_random_with_rng(text, kind, alnum_only, probability, &mut rng)
}

/// Like [`insert_random`] but draws from a caller-owned generator.
pub fn insert_random_with_rng<R: Rng + ?Sized>(
    text: &str,
    kind: ZeroWidthKind,
    alnum_only: bool,
    probability: f64,
    rng: &mut R,
) -> String {
    let probability = clamp_probability(probability);
    let zw = kind.as_char();
    let mut out = String::with_capacity(text.len() * 2);
    let mut inserted = 0usize;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if let Some(&next) = chars.peek() {
            // The draw only happens at eligible boundaries, which keeps the
            // sequence of draws stable for a given input.
            if is_eligible_boundary(ch, next, alnum_only) && rng.random::<f64>() < probability {
                out.push(zw);
                inserted += 1;
            }
        }
    }

    debug!("Random insertion placed {} {} character(s) (p = {}).", inserted, kind, probability);
    out
}

/// Splits every occurrence of each keyword with `kind`, keyword by keyword.
///
/// Keywords are processed in order and each one rescans the text produced by
/// the previous one. Matching is left to right and non-overlapping. Blank
/// keywords are skipped. A match is replaced by the keyword itself with
/// `kind` between each pair of its characters, so a case-insensitive match
/// takes on the keyword's casing.
pub fn insert_keywords<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
    kind: ZeroWidthKind,
    case_sensitive: bool,
) -> Result<String, ZwError> {
    if keywords.is_empty() {
        return Err(ZwError::EmptyKeywordList);
    }

    let mut current: Vec<char> = text.chars().collect();

    for (idx, keyword) in keywords.iter().enumerate() {
        let keyword = keyword.as_ref();
        if keyword.trim().is_empty() {
            debug!("Skipping blank keyword at position {}.", idx);
            continue;
        }
        let needle: Vec<char> = keyword.chars().collect();
        let replacement: Vec<char> = split_every_boundary(keyword, kind).chars().collect();
        let (next, hits) = split_occurrences(&current, &needle, &replacement, case_sensitive);
        debug!("Keyword #{} ({} chars) matched {} time(s).", idx, needle.len(), hits);
        current = next;
    }

    Ok(current.into_iter().collect())
}

fn split_occurrences(
    hay: &[char],
    needle: &[char],
    replacement: &[char],
    case_sensitive: bool,
) -> (Vec<char>, usize) {
    let mut out = Vec::with_capacity(hay.len() + hay.len() / 2);
    let mut hits = 0usize;
    let mut i = 0usize;

    while i < hay.len() {
        match hay.get(i..i + needle.len()) {
            Some(window) if window_matches(window, needle, case_sensitive) => {
                out.extend_from_slice(replacement);
                hits += 1;
                i += needle.len();
            }
            _ => {
                out.push(hay[i]);
                i += 1;
            }
        }
    }

    (out, hits)
}

fn window_matches(window: &[char], needle: &[char], case_sensitive: bool) -> bool {
    window.iter().zip(needle).all(|(&a, &b)| {
        a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
    })
}

/// Engine for the `every` mode.
#[derive(Debug, Clone)]
pub struct UniformEngine {
    pub kind: ZeroWidthKind,
    pub alnum_only: bool,
    pub every_n: usize,
}

impl TextTransform for UniformEngine {
    fn name(&self) -> &'static str {
        "every"
    }

    fn transform(&self, text: &str) -> Result<String, ZwError> {
        Ok(insert_uniform(text, self.kind, self.alnum_only, self.every_n))
    }
}

/// Engine for the `random` mode.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    pub kind: ZeroWidthKind,
    pub alnum_only: bool,
    pub probability: f64,
    pub seed: SeedPolicy,
}

impl TextTransform for RandomEngine {
    fn name(&self) -> &'static str {
        "random"
    }

    fn transform(&self, text: &str) -> Result<String, ZwError> {
        if !(0.0..=1.0).contains(&self.probability) {
            warn!("Probability {} is outside [0, 1]; clamping.", self.probability);
        }
        Ok(insert_random(text, self.kind, self.alnum_only, self.probability, self.seed))
    }
}

/// Engine for the `keywords` mode.
#[derive(Debug, Clone)]
pub struct KeywordEngine {
    pub kind: ZeroWidthKind,
    pub keywords: Vec<String>,
    pub case_sensitive: bool,
}

impl TextTransform for KeywordEngine {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn transform(&self, text: &str) -> Result<String, ZwError> {
        insert_keywords(text, &self.keywords, self.kind, self.case_sensitive)
    }
}
