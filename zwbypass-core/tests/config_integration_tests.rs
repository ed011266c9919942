// zwbypass-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use zwbypass_core::config::ObfuscationConfig;
use zwbypass_core::{headless_transform_string, Mode, NormalizationForm, SeedPolicy, TransformOutput, ZeroWidthKind};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_full_config() -> Result<()> {
    let file = write_config(
        r#"
zero_width: zwnj
alnum_only: false
every_n: 3
probability: 0.25
seed: 42
keywords:
  - admin
  - select
case_sensitive: true
normalization: nfc
show_hex: false
"#,
    )?;
    let config = ObfuscationConfig::load_from_file(file.path())?;
    assert_eq!(config.zero_width, ZeroWidthKind::NonJoiner);
    assert!(!config.alnum_only);
    assert_eq!(config.every_n, 3);
    assert_eq!(config.probability, 0.25);
    assert_eq!(config.seed_policy(), SeedPolicy::Fixed(42));
    assert_eq!(config.keywords, vec!["admin".to_string(), "select".to_string()]);
    assert!(config.case_sensitive);
    assert_eq!(config.normalization, Some(NormalizationForm::Nfc));
    assert!(!config.show_hex);
    Ok(())
}

#[test]
fn test_omitted_fields_use_defaults() -> Result<()> {
    let file = write_config("zero_width: zwj\n")?;
    let config = ObfuscationConfig::load_from_file(file.path())?;
    assert_eq!(config.zero_width, ZeroWidthKind::Joiner);
    assert_eq!(config.every_n, 1);
    assert_eq!(config.normalization, Some(NormalizationForm::Nfkc));
    assert!(config.show_hex);
    Ok(())
}

#[test]
fn test_null_normalization_disables_it() -> Result<()> {
    let file = write_config("normalization: null\n")?;
    let config = ObfuscationConfig::load_from_file(file.path())?;
    assert_eq!(config.normalization, None);

    let out = headless_transform_string(&config, Mode::Strip, "\u{FB01}\u{200B}x")?;
    assert_eq!(out, TransformOutput::Text("\u{FB01}x".to_string()));
    Ok(())
}

#[test]
fn test_out_of_range_probability_is_clamped() -> Result<()> {
    let file = write_config("probability: -0.5\n")?;
    let config = ObfuscationConfig::load_from_file(file.path())?;
    assert_eq!(config.probability, 0.0);
    Ok(())
}

#[test]
fn test_zero_every_n_is_rejected() -> Result<()> {
    let file = write_config("every_n: 0\n")?;
    let err = ObfuscationConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("every_n must be at least 1"));
    Ok(())
}

#[test]
fn test_unknown_zero_width_kind_fails_to_parse() -> Result<()> {
    let file = write_config("zero_width: nbsp\n")?;
    assert!(ObfuscationConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_missing_file_reports_path() {
    let err = ObfuscationConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
