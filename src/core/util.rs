//! Common utilities

use std::io::{self, Write};
use xxhash_rust::xxh3::Xxh3;

/// Format a 64-bit digest as 16 lowercase hex digits
fn hex_digest(digest: u64) -> String {
    format!("{:016x}", digest)
}

/// Writer adapter that counts and hashes everything passed through it
pub struct HashingWriter<W> {
    inner: W,
    hasher: Xxh3,
    bytes: u64,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Xxh3::new(),
            bytes: 0,
        }
    }

    /// Bytes accepted by the inner writer so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Hash of the bytes accepted so far
    pub fn digest(&self) -> String {
        hex_digest(self.hasher.digest())
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
