use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to create parent directory")]
    CreateParentDirectory(#[source] std::io::Error),

    #[error("File or directory returned an empty string, and may contain invalid UTF-8 characters")]
    InvalidFilename,

    #[error("Failed to remove stale output file '{}'", path.display())]
    RemoveStale{path: PathBuf, #[source] source: std::io::Error},
}
