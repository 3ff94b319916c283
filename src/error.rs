use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading dashboard content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lesson id {id} appears more than once in the curriculum")]
    DuplicateLesson { id: i64 },
}
