use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("cannot read transducer {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid transducer binary {}: {reason}", .path.display())]
    InvalidBinary { path: PathBuf, reason: String },

    #[error("unsupported lexicon version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl OracleError {
    /// True when the transducer file itself does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OracleError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
