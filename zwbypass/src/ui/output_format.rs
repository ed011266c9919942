// zwbypass/src/ui/output_format.rs
//! Helpers for writing themed status messages.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` to `text` when `enable_colors` is set.
pub fn styled(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(&format!("{}{}", prefix, msg), entry, theme_map, enable_colors))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "[*] ", msg, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "[+] ", msg, ThemeEntry::Success, theme_map, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "[!] ", msg, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "[-] ", msg, ThemeEntry::Error, theme_map, enable_colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_has_no_escapes() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[-] boom\n");
    }

    #[test]
    fn colored_output_strips_back_to_plain() {
        let theme = ThemeStyle::default_theme_map();
        let colored = styled("tag", ThemeEntry::ZeroWidthTag, &theme, true);
        assert_ne!(colored, "tag");
        let stripped = strip_ansi_escapes::strip(colored.as_bytes());
        assert_eq!(String::from_utf8(stripped).unwrap(), "tag");
    }
}
