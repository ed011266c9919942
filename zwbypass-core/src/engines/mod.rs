// zwbypass-core/src/engines/mod.rs
//! Concrete transformation engines.
//!
//! Each file exposes its algorithm as a free function and, where the mode
//! produces a string, an engine struct implementing `TextTransform`.
//!
//! License: MIT OR APACHE 2.0

pub mod detection;
pub mod homoglyph;
pub mod insertion;
pub mod strip;
