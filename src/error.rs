use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that can abort a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error("cannot derive a deck name from {}; pass --deck-name", .0.display())]
    UnnamedInput(PathBuf),

    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write deck output")]
    Write(#[source] io::Error),
}

impl ConvertError {
    /// Configuration problems are reported plainly and exit with status 1.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ConvertError::MissingInput(_) | ConvertError::UnnamedInput(_)
        )
    }
}
