#![cfg(unix)]

use mockall::Sequence;
use std::fs::{self, create_dir_all, File};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use vpo_presets_core::config::PresetConfig;
use vpo_presets_core::contract::{Decision, MockConfirmer, PromptConfirmer};
use vpo_presets_core::generate::generate_presets;

struct Library {
    tmp: TempDir,
    sfizz: PathBuf,
    presets: PathBuf,
    vpo: PathBuf,
}

/// Builds a small VPO-like tree:
/// vpo/Brass/Horn.sfz, vpo/Strings/Cello.sfz, vpo/Strings/Violin.sfz, vpo/Strings/notes.txt
fn library() -> Library {
    let tmp = tempdir().unwrap();
    let sfizz = tmp.path().join("sfizz.lv2");
    create_dir_all(sfizz.join("Contents/Resources")).unwrap();
    File::create(sfizz.join("Contents/Resources/DefaultScale.scl")).unwrap();

    let vpo = tmp.path().join("vpo");
    for rel in ["Brass/Horn.sfz", "Strings/Cello.sfz", "Strings/Violin.sfz", "Strings/notes.txt"] {
        let path = vpo.join(rel);
        create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path).unwrap();
    }

    Library {
        sfizz,
        presets: tmp.path().join("presets"),
        vpo,
        tmp,
    }
}

fn config(lib: &Library, inputs: Vec<PathBuf>, no_confirm: bool) -> PresetConfig {
    PresetConfig {
        sfizz_lv2_directory: lib.sfizz.clone(),
        lv2_preset_directory: lib.presets.clone(),
        overwrite_lv2_preset: false,
        no_confirm_globbed_sfzs: no_confirm,
        vpo_sfz_files: inputs,
    }
}

fn bundles(presets: &Path) -> Vec<String> {
    if !presets.exists() {
        return vec![];
    }
    let mut names: Vec<_> = fs::read_dir(presets)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_no_confirm_converts_every_globbed_sfz_without_prompting() {
    let lib = library();
    let config = config(&lib, vec![lib.vpo.clone()], true);
    let mut confirmer = MockConfirmer::new();
    confirmer.expect_confirm().never();
    let mut console = Vec::new();

    let report = generate_presets(&config, &mut confirmer, &mut console).unwrap();

    assert_eq!(report.created.len(), 3);
    assert!(!report.aborted);
    assert_eq!(
        bundles(&lib.presets),
        vec![
            "sfizz_VPO_Brass_Horn.lv2",
            "sfizz_VPO_Strings_Cello.lv2",
            "sfizz_VPO_Strings_Violin.lv2"
        ]
    );
    let console = String::from_utf8(console).unwrap();
    assert_eq!(console.matches("- Creating LV2 preset: ").count(), 3);
}

#[test]
fn test_rejected_files_are_skipped_and_scanning_continues() {
    let lib = library();
    let config = config(&lib, vec![lib.vpo.clone()], false);
    let mut confirmer = MockConfirmer::new();
    confirmer
        .expect_confirm()
        .times(3)
        .returning(|p: &Path| {
            Ok(if p.ends_with("Cello.sfz") {
                Decision::Accept
            } else {
                Decision::Reject
            })
        });
    let mut console = Vec::new();

    let report = generate_presets(&config, &mut confirmer, &mut console).unwrap();

    assert_eq!(bundles(&lib.presets), vec!["sfizz_VPO_Strings_Cello.lv2"]);
    assert_eq!(report.created.len(), 1);
    assert!(!report.aborted);
}

#[test]
fn test_abort_stops_remaining_files_and_later_inputs() {
    let lib = library();
    let later_file = lib.vpo.join("Strings/Violin.sfz");
    let config = config(&lib, vec![lib.vpo.clone(), later_file], false);

    let mut seq = Sequence::new();
    let mut confirmer = MockConfirmer::new();
    confirmer
        .expect_confirm()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Decision::Accept));
    confirmer
        .expect_confirm()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Decision::Abort));
    let mut console = Vec::new();

    let report = generate_presets(&config, &mut confirmer, &mut console).unwrap();

    assert!(report.aborted);
    assert_eq!(report.created.len(), 1, "only the file accepted before abort");
    assert_eq!(bundles(&lib.presets).len(), 1);
    let console = String::from_utf8(console).unwrap();
    assert_eq!(console.matches("- Creating LV2 preset: ").count(), 1);
}

#[test]
fn test_explicit_file_is_never_confirmed() {
    let lib = library();
    let config = config(&lib, vec![lib.vpo.join("Brass/Horn.sfz")], false);
    let mut confirmer = MockConfirmer::new();
    confirmer.expect_confirm().never();
    let mut console = Vec::new();

    let report = generate_presets(&config, &mut confirmer, &mut console).unwrap();

    assert_eq!(
        report.created,
        vec![lib.presets.join("sfizz_VPO_Brass_Horn.lv2")]
    );
    assert_eq!(
        String::from_utf8(console).unwrap(),
        "- Creating LV2 preset: VPO_Brass_Horn\n"
    );
}

#[test]
fn test_existing_bundle_is_reported_and_run_continues() {
    let lib = library();
    let existing = lib.presets.join("sfizz_VPO_Brass_Horn.lv2");
    create_dir_all(&existing).unwrap();
    let config = config(
        &lib,
        vec![
            lib.vpo.join("Brass/Horn.sfz"),
            lib.vpo.join("Strings/Violin.sfz"),
        ],
        false,
    );
    let mut confirmer = MockConfirmer::new();
    let mut console = Vec::new();

    let report = generate_presets(&config, &mut confirmer, &mut console).unwrap();

    assert_eq!(report.skipped_existing, vec![existing.clone()]);
    assert_eq!(
        report.created,
        vec![lib.presets.join("sfizz_VPO_Strings_Violin.lv2")]
    );
    assert!(fs::read_dir(&existing).unwrap().next().is_none());
    let console = String::from_utf8(console).unwrap();
    assert!(console.contains(&format!(
        "Not overwriting existing LV2 preset: {}",
        existing.display()
    )));
}

#[test]
fn test_missing_input_is_reported_not_fatal() {
    let lib = library();
    let missing = lib.tmp.path().join("does-not-exist.sfz");
    let config = config(
        &lib,
        vec![missing.clone(), lib.vpo.join("Brass/Horn.sfz")],
        false,
    );
    let mut confirmer = MockConfirmer::new();
    let mut console = Vec::new();

    let report = generate_presets(&config, &mut confirmer, &mut console).unwrap();

    assert_eq!(report.ignored_inputs, vec![missing.clone()]);
    assert_eq!(report.created.len(), 1);
    let console = String::from_utf8(console).unwrap();
    assert!(console.contains("Ignoring input that is neither a file nor a directory"));
    assert!(console.contains(&missing.display().to_string()));
}

#[test]
fn test_prompt_confirmer_drives_directory_walk() {
    let lib = library();
    let config = config(&lib, vec![lib.vpo.join("Strings")], false);
    let mut prompts = Vec::new();
    let mut console = Vec::new();

    let report = {
        let mut confirmer = PromptConfirmer::new(Cursor::new("n\ny\n"), &mut prompts);
        generate_presets(&config, &mut confirmer, &mut console).unwrap()
    };

    assert_eq!(report.created.len(), 1);
    let prompts = String::from_utf8(prompts).unwrap();
    assert_eq!(prompts.matches("Use this SFZ: ").count(), 2);
    assert!(!prompts.contains("notes.txt"));
}

#[test]
fn test_parent_dir_components_are_resolved_before_naming() {
    let lib = library();
    let sub = lib.vpo.join("Strings/sub");
    create_dir_all(&sub).unwrap();
    let config = config(
        &lib,
        vec![sub.join("../Violin.sfz"), sub.join("..")],
        true,
    );
    let mut confirmer = MockConfirmer::new();
    let mut console = Vec::new();

    let report = generate_presets(&config, &mut confirmer, &mut console).unwrap();

    assert_eq!(report.skipped_existing.len(), 1, "Violin again from the directory");
    assert_eq!(
        bundles(&lib.presets),
        vec!["sfizz_VPO_Strings_Cello.lv2", "sfizz_VPO_Strings_Violin.lv2"]
    );
    let violin = lib.presets.join("sfizz_VPO_Strings_Violin.lv2/Violin.sfz");
    assert_eq!(
        fs::read_link(violin).unwrap(),
        fs::canonicalize(lib.vpo.join("Strings/Violin.sfz")).unwrap()
    );
}

#[test]
fn test_symlinked_input_takes_section_from_its_target() {
    let lib = library();
    let favourites = lib.tmp.path().join("favourites");
    create_dir_all(&favourites).unwrap();
    let link = favourites.join("Violin.sfz");
    std::os::unix::fs::symlink(lib.vpo.join("Strings/Violin.sfz"), &link).unwrap();
    let config = config(&lib, vec![link], false);
    let mut confirmer = MockConfirmer::new();
    let mut console = Vec::new();

    let report = generate_presets(&config, &mut confirmer, &mut console).unwrap();

    assert_eq!(report.created.len(), 1);
    assert_eq!(bundles(&lib.presets), vec!["sfizz_VPO_Strings_Violin.lv2"]);
}
