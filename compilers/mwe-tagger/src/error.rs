use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} is not valid UTF-8")]
    MalformedInput { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
