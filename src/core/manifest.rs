//! Title manifest loading
//!
//! A manifest is a plain-text file with one document title per line. Line
//! order is the output order.

use std::fs;
use std::path::Path;

use crate::core::error::{CollapseError, Result};

/// Ordered list of document titles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    titles: Vec<String>,
}

impl Manifest {
    /// Parse manifest text.
    ///
    /// Each line is trimmed of surrounding whitespace; lines left empty are
    /// dropped.
    pub fn parse(text: &str) -> Self {
        let titles = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { titles }
    }

    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CollapseError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::parse(&text);
        tracing::info!(
            manifest = %path.display(),
            titles = manifest.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_keeps_order() {
        let manifest = Manifest::parse("doc2\ndoc1\ndoc3\n");
        assert_eq!(manifest.titles(), ["doc2", "doc1", "doc3"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let manifest = Manifest::parse("  doc1 \t\r\ndoc2\r\n");
        assert_eq!(manifest.titles(), ["doc1", "doc2"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let manifest = Manifest::parse("doc1\n\n   \ndoc2");
        assert_eq!(manifest.titles(), ["doc1", "doc2"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(Manifest::parse("").is_empty());
        assert!(Manifest::parse("\n\n").is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().unwrap();
        let err = Manifest::load(&temp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CollapseError::ManifestRead { .. }));
    }

    #[test]
    fn test_load_reads_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("titles.txt");
        std::fs::write(&path, "a\nb\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 2);
    }
}
