//! `load_config` module: reads an optional YAML file of defaults for the CLI options.
//!
//! Precedence is: explicit command-line option, then this file, then the
//! built-in default. Every key is optional and unknown keys are rejected.
//!
//! ```yaml
//! sfizz_lv2_directory: /usr/local/lib/lv2/sfizz.lv2
//! lv2_preset_directory: /home/me/.lv2
//! overwrite_lv2_preset: false
//! no_confirm_globbed_sfzs: true
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetDefaults {
    #[serde(default)]
    pub sfizz_lv2_directory: Option<PathBuf>,
    #[serde(default)]
    pub lv2_preset_directory: Option<PathBuf>,
    #[serde(default)]
    pub overwrite_lv2_preset: bool,
    #[serde(default)]
    pub no_confirm_globbed_sfzs: bool,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PresetDefaults> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    // An empty file is a valid "no overrides" config.
    if config_content.trim().is_empty() {
        info!(config_path = ?path_ref, "Config file is empty, using defaults");
        return Ok(PresetDefaults::default());
    }

    match serde_yaml::from_str::<PresetDefaults>(&config_content) {
        Ok(defaults) => {
            info!(config_path = ?path_ref, ?defaults, "Parsed config YAML successfully");
            Ok(defaults)
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            Err(anyhow::anyhow!("Failed to parse config YAML: {e}"))
        }
    }
}
