// zwbypass/src/utils/input.rs
//! Reading the input text and keyword lists.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use crate::utils::platform::eof_key_combo;

/// Returns the input text: `inline` if given, else the contents of `file`, else stdin.
///
/// Trailing newlines are removed from file and stdin input. Inline text is used verbatim.
pub fn read_input(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = inline {
        debug!("Using inline input.");
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        info!("Reading input from file: {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        return Ok(trim_trailing_newlines(&text).to_string());
    }

    let stdin = io::stdin();
    info!("{}", stdin_prompt(stdin.is_terminal()));
    let mut text = String::new();
    stdin
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read input from stdin")?;
    Ok(trim_trailing_newlines(&text).to_string())
}

/// Interactive sessions are told which key ends the input.
fn stdin_prompt(interactive: bool) -> String {
    if interactive {
        format!("Reading input from stdin; press {} to finish.", eof_key_combo())
    } else {
        "Reading input from stdin...".to_string()
    }
}

fn trim_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches('\n')
}

/// Parses a `--keywords` value.
///
/// `@path` reads one keyword per line; anything else is split on commas.
/// Entries are trimmed and blanks dropped. An empty result is returned as is;
/// the keyword engine reports it.
pub fn parse_keywords(spec: &str) -> Result<Vec<String>> {
    let keywords: Vec<String> = match spec.strip_prefix('@') {
        Some(path) => {
            info!("Loading keywords from file: {}", path);
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read keyword file {}", path))?;
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()
        }
        None => spec
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect(),
    };
    debug!("Parsed {} keyword(s).", keywords.len());
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn interactive_prompt_names_platform_eof_key() {
        let expected = if cfg!(windows) { "Ctrl+Z" } else { "Ctrl+D" };
        assert!(stdin_prompt(true).contains(expected));
        assert!(!stdin_prompt(false).contains(expected));
    }

    #[test]
    fn inline_input_is_verbatim() {
        assert_eq!(read_input(Some("admin\n"), None).unwrap(), "admin\n");
    }

    #[test]
    fn file_input_drops_trailing_newlines_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  select\n\n").unwrap();
        assert_eq!(read_input(None, Some(file.path())).unwrap(), "  select");
    }

    #[test]
    fn comma_keywords() {
        assert_eq!(parse_keywords(" admin, ,role,").unwrap(), vec!["admin", "role"]);
        assert!(parse_keywords(" , ").unwrap().is_empty());
    }

    #[test]
    fn file_keywords() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "select\n\n  union \nscript").unwrap();
        let spec = format!("@{}", file.path().display());
        assert_eq!(parse_keywords(&spec).unwrap(), vec!["select", "union", "script"]);
    }

    #[test]
    fn missing_keyword_file_is_error() {
        assert!(parse_keywords("@/no/such/keywords.txt").is_err());
    }
}
