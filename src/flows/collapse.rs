//! Collapse flow - Flatten a document directory into a one-line-per-document corpus
//!
//! Titles are read from a manifest; each named document is read whole, its
//! newlines are replaced by spaces, and the result is written as one line of
//! `<doc_dir>_all.dat`. The first failing read or write aborts the run.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::{CollapseError, Result};
use crate::core::manifest::Manifest;
use crate::core::model::CorpusSummary;
use crate::core::paths::{corpus_path, document_path};
use crate::core::util::HashingWriter;

/// Replace every `\n` byte with a single space.
///
/// Other bytes, `\r` included, pass through untouched.
pub fn flatten_newlines(content: &[u8]) -> Vec<u8> {
    content
        .iter()
        .map(|&b| if b == b'\n' { b' ' } else { b })
        .collect()
}

/// Build the corpus file for `doc_dir` from the titles in `manifest_path`
pub fn build_corpus(manifest_path: &Path, doc_dir: &Path) -> Result<CorpusSummary> {
    let manifest = Manifest::load(manifest_path)?;
    if manifest.is_empty() {
        tracing::warn!(
            manifest = %manifest_path.display(),
            "manifest has no titles, corpus will be empty"
        );
    }

    let output = corpus_path(doc_dir);
    tracing::info!(output = %output.display(), "writing corpus");

    let file = File::create(&output).map_err(|source| CollapseError::OutputCreate {
        path: output.clone(),
        source,
    })?;
    let mut writer = HashingWriter::new(BufWriter::new(file));

    let written = write_documents(&manifest, doc_dir, &output, &mut writer);

    // Flush even on failure so lines for earlier titles reach the file.
    let flushed = writer.flush().map_err(|source| CollapseError::OutputWrite {
        path: output.clone(),
        source,
    });
    let documents = written?;
    flushed?;

    tracing::info!(
        output = %output.display(),
        documents,
        bytes = writer.bytes_written(),
        "corpus complete"
    );

    Ok(CorpusSummary::new(manifest_path, doc_dir, &output).with_totals(
        documents,
        writer.bytes_written(),
        writer.digest(),
    ))
}

/// Append one flattened line per manifest title, in manifest order
fn write_documents<W: Write>(
    manifest: &Manifest,
    doc_dir: &Path,
    output: &Path,
    writer: &mut W,
) -> Result<usize> {
    let mut count = 0;

    for title in manifest.titles() {
        let path = document_path(doc_dir, title);
        let content = fs::read(&path).map_err(|source| CollapseError::DocumentRead {
            title: title.clone(),
            path: path.clone(),
            source,
        })?;

        let line = flatten_newlines(&content);
        writer
            .write_all(&line)
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|source| CollapseError::OutputWrite {
                path: output.to_path_buf(),
                source,
            })?;

        tracing::debug!(title = %title, bytes = line.len() + 1, "wrote document");
        count += 1;
    }

    Ok(count)
}
