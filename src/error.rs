use std::path::PathBuf;

/// Failures at the journal's I/O edge. The psychology engine itself has no
/// error type: it never fails.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Failed to read trade file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trade file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Trade file {} must hold a JSON array, found {found}", .path.display())]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("Report worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, JournalError>;
