// zwbypass/src/utils/mod.rs
pub mod input;
pub mod platform;
