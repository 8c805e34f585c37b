use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
/// Error raised while combining files.
pub enum Error {
    /// An input file could not be opened or decoded as text.
    #[error("Cannot read input {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("Cannot write output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::Read { path, .. } | Error::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
