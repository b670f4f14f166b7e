//! Input expansion: turns command-line inputs into SFZ files to process.
//!
//! Files are used as given. Directories are walked recursively for `*.sfz`
//! up front; the resulting list is then put to a [`Confirmer`] one file at a
//! time, so accepted files are processed before the next prompt.

use crate::contract::{Confirmer, Decision};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension of instrument files. Matched exactly, case-sensitive.
pub const SFZ_EXTENSION: &str = "sfz";

/// How a raw input path is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File,
    Directory,
    /// Missing, or a special file. Reported and skipped.
    Other,
}

pub fn classify_input(path: &Path) -> InputKind {
    if path.is_file() {
        InputKind::File
    } else if path.is_dir() {
        InputKind::Directory
    } else {
        InputKind::Other
    }
}

/// Canonical form of an existing input: absolute, `..` removed, symlinks
/// followed. A path that does not exist is only made absolute so it can be
/// reported.
pub fn resolve_input(path: &Path) -> std::io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => std::path::absolute(path),
        Err(e) => Err(e),
    }
}

/// Recursively collects `*.sfz` files under `dir`, depth-first, each
/// directory's entries visited in file name order.
pub fn find_sfz_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    fn visit_dir(dir: &Path, results: &mut Vec<PathBuf>) -> std::io::Result<()> {
        let mut entries = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort();

        for path in entries {
            if path.is_dir() && !path.is_symlink() {
                visit_dir(&path, results)?;
            } else if path.is_file() && is_sfz(&path) {
                debug!(path = %path.display(), "Found SFZ file");
                results.push(path);
            }
        }
        Ok(())
    }

    let mut results = Vec::new();
    visit_dir(dir, &mut results)?;
    info!(dir = %dir.display(), found = results.len(), "Globbed SFZ files");
    Ok(results)
}

fn is_sfz(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SFZ_EXTENSION)
}

/// Per-candidate result of confirming a globbed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovered {
    Accept(PathBuf),
    Reject(PathBuf),
    /// Stop everything. Nothing after this is yielded.
    Abort,
}

/// Walks the SFZ files found under a directory, asking the confirmer about
/// each one lazily.
pub struct GlobbedSfzs<'c, C: ?Sized> {
    files: std::vec::IntoIter<PathBuf>,
    confirmer: &'c mut C,
    finished: bool,
}

impl<'c, C: Confirmer + ?Sized> GlobbedSfzs<'c, C> {
    pub fn new(dir: &Path, confirmer: &'c mut C) -> std::io::Result<Self> {
        Ok(Self::from_files(find_sfz_files(dir)?, confirmer))
    }

    pub fn from_files(files: Vec<PathBuf>, confirmer: &'c mut C) -> Self {
        Self {
            files: files.into_iter(),
            confirmer,
            finished: false,
        }
    }
}

impl<C: Confirmer + ?Sized> Iterator for GlobbedSfzs<'_, C> {
    type Item = std::io::Result<Discovered>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let path = self.files.next()?;
        let decision = match self.confirmer.confirm(&path) {
            Ok(d) => d,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };
        debug!(path = %path.display(), ?decision, "Operator decision");
        Some(Ok(match decision {
            Decision::Accept => Discovered::Accept(path),
            Decision::Reject => Discovered::Reject(path),
            Decision::Abort => {
                self.finished = true;
                Discovered::Abort
            }
        }))
    }
}
