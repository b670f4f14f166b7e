//! Preset identity for a single VPO instrument file.

use crate::contract::PresetError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Prefix shared by every generated preset name.
pub const PRESET_PREFIX: &str = "VPO";

/// An SFZ file plus the names derived from its path.
///
/// The VPO library groups instruments by section directory, so
/// `/lib/Strings/Violin.sfz` yields section `Strings` and stem `Violin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentFile {
    pub path: PathBuf,
    pub section: String,
    pub stem: String,
    /// Name of the symlink inside the bundle. Kept as-is, not lossily decoded.
    pub file_name: OsString,
}

impl InstrumentFile {
    pub fn from_path(path: &Path) -> Result<Self, PresetError> {
        let invalid = || PresetError::InvalidSfzPath(path.to_path_buf());

        let file_name = path.file_name().ok_or_else(invalid)?;
        let stem = path.file_stem().ok_or_else(invalid)?;
        let section = path
            .parent()
            .and_then(Path::file_name)
            .ok_or_else(invalid)?;

        Ok(Self {
            path: path.to_path_buf(),
            section: section.to_string_lossy().into_owned(),
            stem: stem.to_string_lossy().into_owned(),
            file_name: file_name.to_os_string(),
        })
    }

    /// `VPO_<section>_<stem>`
    pub fn preset_name(&self) -> String {
        format!("{PRESET_PREFIX}_{}_{}", self.section, self.stem)
    }

    /// File name as written into the preset document.
    pub fn file_name_lossy(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }

    /// `sfizz_<preset name>.lv2`
    pub fn bundle_dir_name(&self) -> String {
        format!("sfizz_{}.lv2", self.preset_name())
    }
}
