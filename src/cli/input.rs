//! Where a commit message comes from and how it is read.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Message file git leaves behind for the commit being edited
pub const DEFAULT_MESSAGE_FILE: &str = ".git/COMMIT_EDITMSG";

/// Marker line below which `git commit --verbose` appends the diff
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to read commit message from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("No commit message given and '{}' does not exist", path.display())]
    NoMessage { path: PathBuf },

    #[error("Failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// Passed with `-m`; used verbatim
    Inline(String),
    Stdin,
    File(PathBuf),
}

impl MessageSource {
    /// Sources for the given CLI arguments
    pub fn collect(message: Option<&str>, files: &[PathBuf]) -> Vec<Self> {
        if let Some(message) = message {
            return vec![Self::Inline(message.to_string())];
        }
        if files.is_empty() {
            return vec![Self::File(PathBuf::from(DEFAULT_MESSAGE_FILE))];
        }
        files
            .iter()
            .map(|file| {
                if file.as_os_str() == "-" {
                    Self::Stdin
                } else {
                    Self::File(file.clone())
                }
            })
            .collect()
    }

    /// Path reporters show for this source; `-` for stdin
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Inline(_) => None,
            Self::Stdin => Some(Path::new("-")),
            Self::File(path) => Some(path),
        }
    }

    /// Read the message, dropping git comment lines from file input
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            Self::Inline(message) => Ok(message.clone()),
            Self::Stdin => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(InputError::Stdin)?;
                Ok(strip_comments(&content))
            }
            Self::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    if e.kind() == io::ErrorKind::NotFound && path == Path::new(DEFAULT_MESSAGE_FILE)
                    {
                        InputError::NoMessage { path: path.clone() }
                    } else {
                        InputError::Read {
                            path: path.clone(),
                            source: e,
                        }
                    }
                })?;
                tracing::debug!(path = %path.display(), bytes = content.len(), "read message file");
                Ok(strip_comments(&content))
            }
        }
    }
}

/// Remove `#` comment lines and everything below the scissors line
pub fn strip_comments(content: &str) -> String {
    content
        .lines()
        .take_while(|line| *line != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Overwrite a message file with the corrected message
pub fn write_message(path: &Path, message: &str) -> Result<(), InputError> {
    std::fs::write(path, format!("{}\n", message)).map_err(|e| InputError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
