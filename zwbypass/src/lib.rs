// zwbypass/src/lib.rs
//! # zwbypass CLI Application
//!
//! Terminal front end for `zwbypass-core`: reads the input, resolves settings
//! from flags, environment, and an optional YAML file, runs one mode, and
//! writes the result.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
