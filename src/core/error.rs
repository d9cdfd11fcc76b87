//! Error taxonomy for corpus building
//!
//! Every failure is an I/O failure on one of three artifacts: the manifest,
//! a document, or the corpus file. Each variant keeps the path involved so
//! the CLI can print a useful chain.

use std::path::PathBuf;

/// Errors raised while building a corpus
#[derive(Debug, thiserror::Error)]
pub enum CollapseError {
    /// The manifest is missing, unreadable, or not valid UTF-8.
    #[error("failed to read manifest at {path:?}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document named by the manifest is missing or unreadable.
    #[error("failed to read document '{title}' at {path:?}")]
    DocumentRead {
        title: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus file could not be created or truncated.
    #[error("failed to create corpus file at {path:?}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the corpus file failed.
    #[error("failed to write corpus file at {path:?}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CollapseError>;

impl CollapseError {
    /// Path of the artifact the failure happened on
    pub fn path(&self) -> &std::path::Path {
        match self {
            CollapseError::ManifestRead { path, .. }
            | CollapseError::DocumentRead { path, .. }
            | CollapseError::OutputCreate { path, .. }
            | CollapseError::OutputWrite { path, .. } => path,
        }
    }
}
