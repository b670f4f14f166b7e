//! # gen-vpo-sfizz-presets CLI Interface (Module)
//!
//! Argument grammar and glue only. All preset behaviour lives in
//! [`vpo_presets_core`]; this module merges command-line options with the
//! optional YAML defaults file and hands the result to
//! [`vpo_presets_core::generate::generate_presets`].
//!
//! - For command-line users: run the `gen-vpo-sfizz-presets` binary with `--help`.
//! - For programmatic/integration use: call [`run_with`] with a constructed [`Cli`],
//!   a [`Confirmer`] and a console writer.

use crate::load_config::{load_config, PresetDefaults};
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use vpo_presets_core::config::{
    default_lv2_preset_directory, PresetConfig, DEFAULT_SFIZZ_LV2_DIRECTORY,
};
use vpo_presets_core::contract::{Confirmer, PromptConfirmer};
use vpo_presets_core::generate::{generate_presets, GenerateReport};

/// Generate LV2 presets for sfizz from the Virtual Playing Orchestra
#[derive(Parser, Debug)]
#[clap(
    name = "gen-vpo-sfizz-presets",
    version,
    about = "Generate LV2 presets for sfizz from the Virtual Playing Orchestra"
)]
pub struct Cli {
    /// VPO SFZ files for which to create presets. Directories are globbed
    /// recursively for SFZ files, confirming each unless
    /// --no-confirm-globbed-sfzs is passed.
    #[clap(value_name = "VPO_SFZ", required = true, num_args = 1..)]
    pub vpo_sfz_files: Vec<PathBuf>,

    /// Directory to which the sfizz LV2 plugin is installed [default: /usr/lib/lv2/sfizz.lv2]
    #[clap(long)]
    pub sfizz_lv2_directory: Option<PathBuf>,

    /// Directory into which to place the generated LV2 presets [default: ~/.lv2]
    #[clap(long)]
    pub lv2_preset_directory: Option<PathBuf>,

    /// Overwrite existing LV2 presets
    #[clap(long)]
    pub overwrite_lv2_preset: bool,

    /// Use every globbed SFZ file without asking
    #[clap(long)]
    pub no_confirm_globbed_sfzs: bool,

    /// Path to a YAML file with defaults for the options above
    #[clap(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolves the run configuration. CLI options win over the YAML file.
    pub fn preset_config(&self) -> Result<PresetConfig> {
        let defaults = match &self.config {
            Some(path) => load_config(path)?,
            None => PresetDefaults::default(),
        };

        Ok(PresetConfig {
            sfizz_lv2_directory: self
                .sfizz_lv2_directory
                .clone()
                .or(defaults.sfizz_lv2_directory)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SFIZZ_LV2_DIRECTORY)),
            lv2_preset_directory: self
                .lv2_preset_directory
                .clone()
                .or(defaults.lv2_preset_directory)
                .unwrap_or_else(default_lv2_preset_directory),
            overwrite_lv2_preset: self.overwrite_lv2_preset || defaults.overwrite_lv2_preset,
            no_confirm_globbed_sfzs: self.no_confirm_globbed_sfzs
                || defaults.no_confirm_globbed_sfzs,
            vpo_sfz_files: self.vpo_sfz_files.clone(),
        })
    }
}

/// Runs against the process's stdin and stdout.
pub fn run(cli: Cli) -> Result<GenerateReport> {
    let stdin = io::stdin();
    let mut confirmer = PromptConfirmer::new(stdin.lock(), io::stdout());
    run_with(cli, &mut confirmer, &mut io::stdout())
}

/// Extracted CLI logic entrypoint for integration tests and main()
pub fn run_with<C, W>(cli: Cli, confirmer: &mut C, console: &mut W) -> Result<GenerateReport>
where
    C: Confirmer,
    W: Write,
{
    tracing::info!("trace_initialised");

    let config = cli.preset_config()?;
    let report = generate_presets(&config, confirmer, console)?;
    if report.aborted {
        tracing::info!("Run aborted by operator");
    }
    Ok(report)
}
