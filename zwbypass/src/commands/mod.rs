// zwbypass/src/commands/mod.rs
pub mod zwbypass;
