// zwbypass/src/ui/detection_view.rs
//! Renders a detection report for humans.

use std::io::{self, Write};

use zwbypass_core::{DetectionReport, ZeroWidthKind, ZeroWidthPosition};

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes the visualization followed by the position list, or a
/// "no zero-width characters" notice when the report is clean.
///
/// With `enable_colors` the tags are rebuilt from `input` so they can be
/// colored individually; otherwise the report's visualization is written as is.
pub fn print_detection_report<W: Write>(
    writer: &mut W,
    input: &str,
    report: &DetectionReport,
    show_hex: bool,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    if enable_colors {
        let mut line = String::with_capacity(report.visualization.len() * 2);
        for (index, ch) in input.chars().enumerate() {
            match ZeroWidthKind::from_char(ch) {
                Some(kind) => {
                    let tag = ZeroWidthPosition::new(index, kind).tag(show_hex);
                    line.push_str(&styled(&tag, ThemeEntry::ZeroWidthTag, theme_map, true));
                }
                None => line.push(ch),
            }
        }
        writeln!(writer, "{}", line)?;
    } else {
        writeln!(writer, "{}", report.visualization)?;
    }

    writeln!(writer)?;
    if report.is_clean() {
        writeln!(
            writer,
            "{}",
            styled("No zero-width characters found.", ThemeEntry::Success, theme_map, enable_colors)
        )?;
        return Ok(());
    }

    writeln!(writer, "{}", styled("Zero-width positions:", ThemeEntry::Header, theme_map, enable_colors))?;
    for position in &report.positions {
        writeln!(
            writer,
            "  - {}: {}",
            styled(&format!("index {}", position.index), ThemeEntry::PositionIndex, theme_map, enable_colors),
            styled(&position.label, ThemeEntry::PositionLabel, theme_map, enable_colors),
        )?;
    }

    let per_kind: Vec<String> = report
        .count_by_kind()
        .into_iter()
        .map(|(kind, count)| format!("{}: {}", kind.tag(), count))
        .collect();
    let summary = format!("Total: {} ({})", report.positions.len(), per_kind.join(", "));
    writeln!(writer, "{}", styled(&summary, ThemeEntry::Header, theme_map, enable_colors))?;
    Ok(())
}
