// zwbypass-charset/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod registry;
pub mod homoglyph;
pub mod classify;

pub use classify::{is_boundary_char, is_eligible_boundary};
pub use homoglyph::{homoglyph_for, HOMOGLYPHS};
pub use registry::{is_zero_width, UnknownZeroWidthKind, ZeroWidthKind, ZERO_WIDTH_REGISTRY};
