// zwbypass/src/ui/mod.rs
//! Terminal presentation: theme loading, message helpers, and the detection view.

pub mod detection_view;
pub mod output_format;
pub mod theme;
