use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a report run.
///
/// Only three things abort a run: a root that is not a directory, a report
/// destination that cannot be created, and a failed write to the report sink
/// itself. Every per-entry filesystem failure is recoverable and is recorded
/// inside the report instead (see [`crate::engine`]).
#[derive(Debug, Error)]
pub enum DirscribeError {
    #[error("invalid root: {0} is not a directory")]
    InvalidRoot(PathBuf),
    #[error("failed to create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}

impl DirscribeError {
    pub(crate) fn create_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirscribeError::CreateOutput {
            path: path.into(),
            source,
        }
    }
}
