use std::path::PathBuf;
use tracing::{debug, info};

/// Where the sfizz LV2 plugin is installed on most Linux distributions.
pub const DEFAULT_SFIZZ_LV2_DIRECTORY: &str = "/usr/lib/lv2/sfizz.lv2";

/// Tuning resource shipped inside the sfizz bundle, relative to its root.
pub const DEFAULT_SCALE_SUBPATH: &str = "Contents/Resources/DefaultScale.scl";

/// Resolved settings for one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetConfig {
    pub sfizz_lv2_directory: PathBuf,
    pub lv2_preset_directory: PathBuf,
    pub overwrite_lv2_preset: bool,
    pub no_confirm_globbed_sfzs: bool,
    pub vpo_sfz_files: Vec<PathBuf>,
}

impl PresetConfig {
    /// Config with default directories and both flags off.
    pub fn with_defaults(vpo_sfz_files: Vec<PathBuf>) -> Self {
        Self {
            sfizz_lv2_directory: PathBuf::from(DEFAULT_SFIZZ_LV2_DIRECTORY),
            lv2_preset_directory: default_lv2_preset_directory(),
            overwrite_lv2_preset: false,
            no_confirm_globbed_sfzs: false,
            vpo_sfz_files,
        }
    }

    /// Absolute location of the plugin's default tuning file.
    pub fn default_scale_scl(&self) -> PathBuf {
        self.sfizz_lv2_directory.join(DEFAULT_SCALE_SUBPATH)
    }

    pub fn trace_loaded(&self) {
        info!(
            sfizz_lv2_directory = %self.sfizz_lv2_directory.display(),
            lv2_preset_directory = %self.lv2_preset_directory.display(),
            overwrite = self.overwrite_lv2_preset,
            no_confirm = self.no_confirm_globbed_sfzs,
            inputs = self.vpo_sfz_files.len(),
            "Loaded preset config"
        );
        debug!(?self, "Preset config loaded (full debug)");
    }
}

/// Get the default LV2 preset directory
///
/// Returns: `~/.lv2`
pub fn default_lv2_preset_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lv2")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_directory_ends_with_dot_lv2() {
        assert!(default_lv2_preset_directory().ends_with(".lv2"));
    }

    #[test]
    fn test_default_scale_is_under_plugin_resources() {
        let mut config = PresetConfig::with_defaults(vec![]);
        config.sfizz_lv2_directory = PathBuf::from("/opt/sfizz.lv2");
        assert_eq!(
            config.default_scale_scl(),
            PathBuf::from("/opt/sfizz.lv2/Contents/Resources/DefaultScale.scl")
        );
    }

    #[test]
    fn test_with_defaults_leaves_flags_off() {
        let config = PresetConfig::with_defaults(vec![PathBuf::from("a.sfz")]);
        assert!(!config.overwrite_lv2_preset);
        assert!(!config.no_confirm_globbed_sfzs);
        assert_eq!(
            config.sfizz_lv2_directory,
            PathBuf::from(DEFAULT_SFIZZ_LV2_DIRECTORY)
        );
        assert_eq!(config.vpo_sfz_files, vec![PathBuf::from("a.sfz")]);
    }
}
