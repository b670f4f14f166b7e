//! # contract: seams between the run orchestration and the outside world
//!
//! - [`Confirmer`] is the only place operator input enters the program. The
//!   binary wires a [`PromptConfirmer`] over stdin/stdout; tests use the
//!   `mockall` generated `MockConfirmer` or in-memory buffers.
//! - [`PresetError`] is the error type for everything that is not a recognised
//!   per-item outcome.

use mockall::automock;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Answer that proceeds with a globbed file.
pub const ACCEPT_TOKEN: &str = "y";
/// Answer that stops the whole run.
pub const ABORT_TOKEN: &str = "q";

/// Operator verdict for one discovered SFZ file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
    Abort,
}

impl Decision {
    /// Only the exact tokens count; everything else declines.
    pub fn from_answer(answer: &str) -> Self {
        match answer {
            ACCEPT_TOKEN => Decision::Accept,
            ABORT_TOKEN => Decision::Abort,
            _ => Decision::Reject,
        }
    }
}

/// Asks whether a globbed SFZ file should become a preset.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait Confirmer {
    fn confirm(&mut self, candidate: &Path) -> std::io::Result<Decision>;
}

/// Accepts every candidate without asking.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl Confirmer for AcceptAll {
    fn confirm(&mut self, _candidate: &Path) -> std::io::Result<Decision> {
        Ok(Decision::Accept)
    }
}

/// Prints `Use this SFZ: <name>? [yNq] ` and reads one line of answer.
pub struct PromptConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirmer for PromptConfirmer<R, W> {
    fn confirm(&mut self, candidate: &Path) -> std::io::Result<Decision> {
        let name = candidate
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        write!(self.output, "Use this SFZ: {name}? [yNq] ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF
            return Ok(Decision::Reject);
        }
        let answer = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line);
        Ok(Decision::from_answer(answer))
    }
}

#[derive(Debug)]
pub enum PresetError {
    Io(std::io::Error),
    /// The path has no parent directory name, stem or file name to derive a preset from.
    InvalidSfzPath(PathBuf),
}

impl From<std::io::Error> for PresetError {
    fn from(e: std::io::Error) -> Self {
        PresetError::Io(e)
    }
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Io(e) => write!(f, "I/O error: {e}"),
            PresetError::InvalidSfzPath(p) => {
                write!(f, "Cannot derive a preset name from SFZ path: {}", p.display())
            }
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetError::Io(e) => Some(e),
            PresetError::InvalidSfzPath(_) => None,
        }
    }
}
