// zwbypass-charset/src/classify/mod.rs
//! Character classification for boundary selection.

/// Whether `c` counts as part of a word when picking insertion boundaries.
///
/// Uses Unicode's alphabetic and numeric properties, so accented letters and
/// non-Latin scripts qualify just like ASCII letters and digits.
pub fn is_boundary_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Decides whether the boundary between `left` and `right` may receive an insertion.
///
/// With `alnum_only` unset every boundary qualifies.
pub fn is_eligible_boundary(left: char, right: char, alnum_only: bool) -> bool {
    !alnum_only || (is_boundary_char(left) && is_boundary_char(right))
}
