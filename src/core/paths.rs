//! Path derivation for corpus files and documents
//!
//! The corpus file lives next to the document directory and is named after it.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Suffix appended to the document directory name to form the corpus file name
pub const CORPUS_SUFFIX: &str = "_all.dat";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Derive the corpus file path for a document directory.
///
/// Trailing separators are stripped before the suffix is appended, so
/// `docs/` and `docs` both map to `docs_all.dat`. Leading separators are
/// kept: `/data/docs/` maps to `/data/docs_all.dat`.
///
/// The name is built from the raw OS string, so non-UTF-8 directory names
/// keep their bytes.
pub fn corpus_path(doc_dir: &Path) -> PathBuf {
    let mut name = trim_trailing_separators(doc_dir.as_os_str());
    name.push(CORPUS_SUFFIX);
    PathBuf::from(name)
}

#[cfg(unix)]
fn trim_trailing_separators(raw: &OsStr) -> OsString {
    use std::os::unix::ffi::OsStrExt;

    let bytes = raw.as_bytes();
    let end = bytes
        .iter()
        .rposition(|&b| !std::path::is_separator(b as char))
        .map_or(0, |i| i + 1);
    OsStr::from_bytes(&bytes[..end]).to_os_string()
}

#[cfg(not(unix))]
fn trim_trailing_separators(raw: &OsStr) -> OsString {
    OsString::from(raw.to_string_lossy().trim_end_matches(std::path::is_separator))
}

/// Resolve the file holding the document named `title`
pub fn document_path(doc_dir: &Path, title: &str) -> PathBuf {
    doc_dir.join(title)
}
