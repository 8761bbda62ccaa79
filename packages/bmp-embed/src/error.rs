use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two generated files an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Declaration,
    Definition,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration => f.write_str("header"),
            Self::Definition => f.write_str("implementation"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("could not read BMP file '{}'", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {artifact} file '{}'", .path.display())]
    OutputWrite {
        artifact: Artifact,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The size constant is emitted as `uint32_t`.
    #[error(
        "BMP file '{}' is {len} bytes, which does not fit a uint32_t size",
        .path.display()
    )]
    InputTooLarge { path: PathBuf, len: usize },

    #[error(
        "implementation file '{}' would overwrite the header file",
        .path.display()
    )]
    PathConflict { path: PathBuf },
}

impl EmbedError {
    /// The output file an error refers to, if any.
    pub fn artifact(&self) -> Option<Artifact> {
        match self {
            Self::OutputWrite { artifact, .. } => Some(*artifact),
            _ => None,
        }
    }
}
