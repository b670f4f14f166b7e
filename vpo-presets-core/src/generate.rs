//! Top-level run: expands every input and writes a bundle per accepted SFZ file.
//!
//! # Responsibilities
//! - Walk the configured inputs in order (files directly, directories via
//!   [`GlobbedSfzs`]).
//! - Print operator-facing progress and skip notices to `console`.
//! - Stop the whole run on [`Discovered::Abort`], returning normally.
//!
//! # Error Handling
//! An existing bundle with overwrite off is a recorded skip. Any other failure
//! returns immediately as a [`PresetError`]; nothing already written is undone.

use crate::bundle::{write_bundle, BundleOutcome};
use crate::config::PresetConfig;
use crate::contract::{AcceptAll, Confirmer, PresetError};
use crate::discover::{classify_input, resolve_input, Discovered, GlobbedSfzs, InputKind};
use crate::preset::InstrumentFile;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub created: Vec<PathBuf>,
    pub skipped_existing: Vec<PathBuf>,
    /// Inputs that were neither a file nor a directory.
    pub ignored_inputs: Vec<PathBuf>,
    /// The operator answered abort during a directory walk.
    pub aborted: bool,
}

pub fn generate_presets<C, W>(
    config: &PresetConfig,
    confirmer: &mut C,
    console: &mut W,
) -> Result<GenerateReport, PresetError>
where
    C: Confirmer,
    W: Write,
{
    config.trace_loaded();
    let mut accept_all = AcceptAll;
    let confirmer: &mut dyn Confirmer = if config.no_confirm_globbed_sfzs {
        &mut accept_all
    } else {
        confirmer
    };

    let mut report = GenerateReport::default();

    for input in &config.vpo_sfz_files {
        let sfz = resolve_input(input)?;
        match classify_input(&sfz) {
            InputKind::File => process_sfz(&sfz, config, console, &mut report)?,
            InputKind::Directory => {
                info!(dir = %sfz.display(), "Globbing SFZ files in directory");
                for discovered in GlobbedSfzs::new(&sfz, &mut *confirmer)? {
                    match discovered? {
                        Discovered::Accept(path) => {
                            process_sfz(&path, config, console, &mut report)?
                        }
                        Discovered::Reject(_) => {}
                        Discovered::Abort => {
                            info!(dir = %sfz.display(), "Operator aborted the run");
                            report.aborted = true;
                            return Ok(report);
                        }
                    }
                }
            }
            InputKind::Other => {
                warn!(input = %sfz.display(), "Input is neither a file nor a directory");
                writeln!(
                    console,
                    "Ignoring input that is neither a file nor a directory: {}",
                    sfz.display()
                )?;
                report.ignored_inputs.push(sfz);
            }
        }
    }

    info!(
        created = report.created.len(),
        skipped = report.skipped_existing.len(),
        ignored = report.ignored_inputs.len(),
        "Preset generation finished"
    );
    Ok(report)
}

fn process_sfz<W: Write>(
    sfz: &Path,
    config: &PresetConfig,
    console: &mut W,
    report: &mut GenerateReport,
) -> Result<(), PresetError> {
    let instrument = InstrumentFile::from_path(sfz)?;
    writeln!(console, "- Creating LV2 preset: {}", instrument.preset_name())?;

    match write_bundle(&instrument, config) {
        Ok(BundleOutcome::Created(path)) => report.created.push(path),
        Ok(BundleOutcome::SkippedExisting(path)) => {
            writeln!(
                console,
                "Not overwriting existing LV2 preset: {}",
                path.display()
            )?;
            report.skipped_existing.push(path);
        }
        Err(e) => {
            error!(sfz = %sfz.display(), error = %e, "Failed to create LV2 preset");
            return Err(e);
        }
    }
    Ok(())
}
