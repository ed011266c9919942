//! zwbypass command implementation: resolves settings, runs one mode, and
//! writes the result.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use is_terminal::IsTerminal;
use zwbypass_core::{
    headless_transform_string, parse_zero_width_kind, DetectionReport, Mode, NormalizationForm, ObfuscationConfig,
    TransformOutput,
};

use crate::cli::Cli;
use crate::ui::detection_view;
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;
use crate::utils::input::{parse_keywords, read_input};

/// Everything needed for one run, already resolved and validated.
#[derive(Debug, Clone)]
pub struct ZwbypassOptions {
    pub mode: Mode,
    pub config: ObfuscationConfig,
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub encode: bool,
    pub json: bool,
    pub quiet: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Parses a `--norm` value; `none`, `off`, and the empty string disable normalization.
pub fn parse_normalization(value: &str) -> Result<Option<NormalizationForm>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "none" | "off" => Ok(None),
        other => Ok(Some(other.parse::<NormalizationForm>()?)),
    }
}

/// Merges the optional YAML settings file with explicit flags, reads the input,
/// and validates the result. Adjustments made during validation are reported
/// through `theme_map` unless `--quiet` is set.
pub fn build_options(cli: &Cli, theme_map: &ThemeMap) -> Result<ZwbypassOptions> {
    let mode: Mode = cli.mode.parse()?;

    let mut config = match &cli.config {
        Some(path) => ObfuscationConfig::load_from_file(path)?,
        None => ObfuscationConfig::default(),
    };

    if let Some(zw) = &cli.zw {
        config.zero_width = parse_zero_width_kind(zw)?;
    }
    if let Some(p) = cli.prob {
        config.probability = p;
    }
    if let Some(n) = cli.every_n {
        config.every_n = n;
    }
    if cli.all_boundaries {
        config.alnum_only = false;
    }
    if cli.case_sensitive {
        config.case_sensitive = true;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.random_seed {
        config.nondeterministic = true;
    }
    if let Some(norm) = &cli.norm {
        config.normalization = parse_normalization(norm)?;
    }
    if cli.no_hex {
        config.show_hex = false;
    }
    if let Some(spec) = &cli.keywords {
        config.keywords = parse_keywords(spec)?;
    }
    let requested_probability = config.probability;
    config.validate()?;
    if config.probability != requested_probability && !cli.quiet {
        warn_msg(
            format!(
                "Probability {} is outside [0, 1]; using {}.",
                requested_probability, config.probability
            ),
            theme_map,
        );
    }
    debug!("Resolved configuration: {:?}", config);

    let input = read_input(cli.input.as_deref(), cli.file.as_deref())?;

    Ok(ZwbypassOptions {
        mode,
        config,
        input,
        output_path: cli.output.clone(),
        encode: cli.encode,
        json: cli.json,
        quiet: cli.quiet,
    })
}

/// Percent-encodes everything except ASCII alphanumerics and `-._~`.
pub fn encode_output(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// The main operation runner for the zwbypass CLI.
pub fn run_zwbypass_opts(opts: &ZwbypassOptions, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting zwbypass operation in '{}' mode.", opts.mode);

    match headless_transform_string(&opts.config, opts.mode, &opts.input)? {
        TransformOutput::Detection(report) => handle_detection_output(opts, &report, theme_map)?,
        TransformOutput::Text(text) => {
            debug!(
                "Input codepoints: {}, output codepoints: {}",
                opts.input.chars().count(),
                text.chars().count()
            );
            let text = if opts.encode { encode_output(&text) } else { text };
            handle_primary_output(opts, &text, theme_map)?;
        }
    }

    info!("zwbypass operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &ZwbypassOptions, result: &str, theme_map: &ThemeMap) -> Result<()> {
    if let Some(path) = &opts.output_path {
        fs::write(path, result).with_context(|| format!("Failed to write output file: {}", path.display()))?;
        if !opts.quiet {
            success_msg(format!("Wrote result to file: {}", path.display()), theme_map);
        }
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", result)?;
    }
    Ok(())
}

fn handle_detection_output(opts: &ZwbypassOptions, report: &DetectionReport, theme_map: &ThemeMap) -> Result<()> {
    let show_hex = opts.config.show_hex;
    if let Some(path) = &opts.output_path {
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        if opts.json {
            writeln!(file, "{}", report.to_json_pretty()?)?;
        } else {
            detection_view::print_detection_report(&mut file, &opts.input, report, show_hex, theme_map, false)?;
        }
        if !opts.quiet {
            success_msg(format!("Wrote detection report to file: {}", path.display()), theme_map);
        }
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        if opts.json {
            writeln!(writer, "{}", report.to_json_pretty()?)?;
        } else {
            detection_view::print_detection_report(&mut writer, &opts.input, report, show_hex, theme_map, supports_color)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn theme() -> ThemeMap {
        crate::ui::theme::ThemeStyle::default_theme_map()
    }

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["zwbypass"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let args = cli(&[
            "-i", "x", "--mode", "random", "--zw", "zwj", "--prob", "2.0", "--all-boundaries", "--seed", "9",
        ]);
        let opts = build_options(&args, &theme()).unwrap();
        assert_eq!(opts.mode, Mode::Random);
        assert_eq!(opts.config.zero_width, zwbypass_core::ZeroWidthKind::Joiner);
        assert_eq!(opts.config.probability, 1.0);
        assert!(!opts.config.alnum_only);
        assert_eq!(opts.config.seed, 9);
    }

    #[test]
    fn invalid_mode_is_reported() {
        let err = build_options(&cli(&["-i", "x", "--mode", "scramble"]), &theme()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<zwbypass_core::ZwError>(),
            Some(zwbypass_core::ZwError::InvalidMode(_))
        ));
    }

    #[test]
    fn zero_every_n_rejected() {
        assert!(build_options(&cli(&["-i", "x", "--every-n", "0"]), &theme()).is_err());
    }

    #[test]
    fn zero_width_flag_is_parsed_case_insensitively() {
        let opts = build_options(&cli(&["-i", "x", "--zw", "ZWNJ"]), &theme()).unwrap();
        assert_eq!(opts.config.zero_width, zwbypass_core::ZeroWidthKind::NonJoiner);
    }

    #[test]
    fn unknown_zero_width_flag_is_a_usage_error() {
        let err = build_options(&cli(&["-i", "x", "--zw", "nbsp"]), &theme()).unwrap_err();
        match err.downcast_ref::<zwbypass_core::ZwError>() {
            Some(zwbypass_core::ZwError::UnknownZeroWidthKind(name)) => assert_eq!(name, "nbsp"),
            other => panic!("expected UnknownZeroWidthKind, got {:?}", other),
        }
    }

    #[test]
    fn normalization_values() {
        assert_eq!(parse_normalization("none").unwrap(), None);
        assert_eq!(parse_normalization("NFD").unwrap(), Some(NormalizationForm::Nfd));
        assert!(parse_normalization("nfz").is_err());
    }

    #[test]
    fn encoding_matches_strict_percent_encoding() {
        assert_eq!(encode_output("a\u{200B}b"), "a%E2%80%8Bb");
        assert_eq!(encode_output("a b&c=d/e-f_g.h~i"), "a%20b%26c%3Dd%2Fe-f_g.h~i");
    }
}
