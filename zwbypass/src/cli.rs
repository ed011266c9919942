//! This file defines the command-line interface (CLI) for zwbypass.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "zwbypass",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Zero-width / homoglyph obfuscation helper (for authorized testing).",
    long_about = "zwbypass generates, detects, and strips zero-width and homoglyph obfuscations. It can split words with invisible characters (everywhere, at random, or only inside chosen keywords), swap letters for lookalikes, show where zero-width characters hide in a string, and remove them again with Unicode normalization.",
)]
pub struct Cli {
    /// Input string (or use --file or STDIN).
    #[arg(long, short = 'i', value_name = "TEXT", conflicts_with = "file", help = "Input string (or use --file or STDIN).")]
    pub input: Option<String>,

    /// Read input from file.
    #[arg(long, short = 'f', value_name = "FILE", help = "Read input from file.")]
    pub file: Option<PathBuf>,

    /// Operation mode: every, random, keywords, homoglyphs, detect, strip.
    #[arg(long, value_name = "MODE", default_value = "every", env = "ZWBYPASS_MODE", help = "Operation mode: every, random, keywords, homoglyphs, detect, strip.")]
    pub mode: String,

    /// Zero-width character to inject.
    #[arg(long, value_name = "KIND", env = "ZWBYPASS_ZW", help = "Zero-width character to inject: zwsp, zwnj, or zwj [default: zwsp].")]
    pub zw: Option<String>,

    /// Probability for --mode random (0..1).
    #[arg(long, value_name = "P", help = "Probability for --mode random (0..1) [default: 0.5].")]
    pub prob: Option<f64>,

    /// Insert after every Nth boundary in --mode every.
    #[arg(long = "every-n", value_name = "N", help = "Insert after every Nth boundary in --mode every [default: 1].")]
    pub every_n: Option<usize>,

    /// Insert between any chars (not only alnum).
    #[arg(long = "all-boundaries", help = "Insert between any chars (not only alnum).")]
    pub all_boundaries: bool,

    /// Comma-separated keywords, or @file to load one per line.
    #[arg(long, value_name = "LIST|@FILE", help = "Comma-separated keywords for --mode keywords, or @file to load lines.")]
    pub keywords: Option<String>,

    /// Case-sensitive keyword matching.
    #[arg(long = "case-sensitive", help = "Case-sensitive keyword matching.")]
    pub case_sensitive: bool,

    /// Seed for --mode random.
    #[arg(long, value_name = "N", env = "ZWBYPASS_SEED", help = "Seed for --mode random [default: 1337].")]
    pub seed: Option<u64>,

    /// Seed --mode random from the OS so each run differs.
    #[arg(long = "random-seed", help = "Seed --mode random from the OS so each run differs.")]
    pub random_seed: bool,

    /// Normalization form for --mode strip.
    #[arg(long = "norm", value_name = "FORM", help = "Normalization for --mode strip: nfc, nfd, nfkc, nfkd, or none [default: nfkc].")]
    pub norm: Option<String>,

    /// Omit the (U+XXXX) suffix from detection tags.
    #[arg(long = "no-hex", help = "Omit the (U+XXXX) suffix from detection tags.")]
    pub no_hex: bool,

    /// Emit the detection report as JSON.
    #[arg(long, help = "Emit the --mode detect report as JSON.")]
    pub json: bool,

    /// URL-encode the output.
    #[arg(long, help = "URL-encode the output.")]
    pub encode: bool,

    /// Write result to file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write result to file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a YAML settings file.
    #[arg(long = "config", value_name = "FILE", env = "ZWBYPASS_CONFIG", help = "Path to a YAML settings file; flags override its values.")]
    pub config: Option<PathBuf>,

    /// Path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_typical_invocation() {
        let cli = Cli::try_parse_from([
            "zwbypass", "-i", "admin", "--mode", "keywords", "--keywords", "admin,role", "--zw", "zwnj",
        ])
        .unwrap();
        assert_eq!(cli.input.as_deref(), Some("admin"));
        assert_eq!(cli.mode, "keywords");
        assert_eq!(cli.zw.as_deref(), Some("zwnj"));
    }

    #[test]
    fn input_and_file_conflict() {
        assert!(Cli::try_parse_from(["zwbypass", "-i", "x", "-f", "in.txt"]).is_err());
    }
}
