// zwbypass/src/main.rs
//! zwbypass entry point.
//!
//! Parses flags, initializes logging and the theme, and runs a single mode.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use zwbypass::cli::Cli;
use zwbypass::commands::zwbypass::{build_options, error_msg, run_zwbypass_opts};
use zwbypass::logger;
use zwbypass::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use zwbypass_core::ZwError;

/// Usage errors (bad mode, missing keywords, bad settings) exit with 2, anything else with 1.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.downcast_ref::<ZwError>().is_some()) {
        2
    } else {
        1
    }
}

fn run(cli: &Cli, theme_map: &ThemeMap) -> Result<()> {
    let opts = build_options(cli, theme_map)?;
    run_zwbypass_opts(&opts, theme_map)
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    info!("zwbypass started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = match build_theme_map(cli.theme.as_ref()).context("Theme error") {
        Ok(map) => map,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            error_msg(format!("{:#}", e), &fallback);
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &theme_map) {
        error_msg(format!("{:#}", e), &theme_map);
        process::exit(exit_code_for(&e));
    }
}
