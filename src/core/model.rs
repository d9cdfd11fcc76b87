//! Run summary model
//!
//! A successful build is described by a single [`CorpusSummary`], which the
//! renderer prints to stdout.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::paths::normalize_path;

/// Description of a finished corpus build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Manifest the titles were read from
    pub manifest: String,

    /// Directory the documents were read from
    pub document_dir: String,

    /// Corpus file that was written
    pub output: String,

    /// Number of documents (and therefore lines) written
    pub documents: usize,

    /// Total bytes written, newline terminators included
    pub bytes: u64,

    /// XXH3 hash of the corpus file contents
    pub hash: String,
}

impl CorpusSummary {
    pub fn new(manifest: &Path, document_dir: &Path, output: &Path) -> Self {
        Self {
            manifest: normalize_path(manifest),
            document_dir: normalize_path(document_dir),
            output: normalize_path(output),
            documents: 0,
            bytes: 0,
            hash: String::new(),
        }
    }

    /// Set the totals once the corpus file is closed
    pub fn with_totals(mut self, documents: usize, bytes: u64, hash: impl Into<String>) -> Self {
        self.documents = documents;
        self.bytes = bytes;
        self.hash = hash.into();
        self
    }
}
