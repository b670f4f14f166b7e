use serial_test::serial;
use std::env;
use std::path::PathBuf;
use vpo_presets_core::config::{default_lv2_preset_directory, PresetConfig};

#[cfg(unix)]
#[test]
#[serial]
fn test_default_preset_directory_follows_home() {
    let previous = env::var_os("HOME");
    env::set_var("HOME", "/home/orchestra");

    let dir = default_lv2_preset_directory();
    let config = PresetConfig::with_defaults(vec![PathBuf::from("Violin.sfz")]);

    match previous {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }

    assert_eq!(dir, PathBuf::from("/home/orchestra/.lv2"));
    assert_eq!(config.lv2_preset_directory, PathBuf::from("/home/orchestra/.lv2"));
}
