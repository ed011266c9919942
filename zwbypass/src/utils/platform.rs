// zwbypass/src/utils/platform.rs
//! Platform-specific hints.

/// The key combination that ends interactive stdin input.
pub fn eof_key_combo() -> &'static str {
    if cfg!(windows) { "Ctrl+Z" } else { "Ctrl+D" }
}
