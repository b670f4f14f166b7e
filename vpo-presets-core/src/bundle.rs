//! Writes one sfizz preset bundle to disk.
//!
//! Layout under the preset directory:
//! ```text
//! sfizz_VPO_<section>_<stem>.lv2/
//! ├── DefaultScale.scl          -> <sfizz.lv2>/Contents/Resources/DefaultScale.scl
//! ├── <stem>.sfz                -> original SFZ file
//! ├── manifest.ttl
//! └── VPO_<section>_<stem>.ttl
//! ```
//! Writes are ordered, not transactional. A failure partway leaves the
//! partial bundle behind.

use crate::config::PresetConfig;
use crate::contract::PresetError;
use crate::preset::InstrumentFile;
use crate::template::{
    preset_file_name, render_manifest, render_preset, DEFAULT_SCALE_FILE_NAME, MANIFEST_FILE_NAME,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened to one instrument file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleOutcome {
    Created(PathBuf),
    /// A bundle already existed at this path and overwriting is off.
    SkippedExisting(PathBuf),
}

/// Target bundle directory for an instrument under the configured preset directory.
pub fn bundle_path(instrument: &InstrumentFile, config: &PresetConfig) -> PathBuf {
    config
        .lv2_preset_directory
        .join(instrument.bundle_dir_name())
}

/// Creates (or with overwrite, recreates) the bundle for `instrument`.
pub fn write_bundle(
    instrument: &InstrumentFile,
    config: &PresetConfig,
) -> Result<BundleOutcome, PresetError> {
    let preset_name = instrument.preset_name();
    let preset_lv2 = bundle_path(instrument, config);

    if preset_lv2.exists() || preset_lv2.is_symlink() {
        if !config.overwrite_lv2_preset {
            warn!(path = %preset_lv2.display(), "Not overwriting existing LV2 preset");
            return Ok(BundleOutcome::SkippedExisting(preset_lv2));
        }
        info!(path = %preset_lv2.display(), "Removing existing LV2 preset");
        remove_existing(&preset_lv2)?;
    }

    fs::create_dir_all(&preset_lv2)?;
    debug!(path = %preset_lv2.display(), "Created bundle directory");

    symlink(
        &config.default_scale_scl(),
        &preset_lv2.join(DEFAULT_SCALE_FILE_NAME),
    )?;
    symlink(&instrument.path, &preset_lv2.join(&instrument.file_name))?;

    fs::write(
        preset_lv2.join(MANIFEST_FILE_NAME),
        render_manifest(&preset_name),
    )?;
    fs::write(
        preset_lv2.join(preset_file_name(&preset_name)),
        render_preset(&preset_name, &instrument.file_name_lossy()),
    )?;

    info!(preset = %preset_name, path = %preset_lv2.display(), "Created LV2 preset");
    Ok(BundleOutcome::Created(preset_lv2))
}

fn remove_existing(path: &Path) -> std::io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
