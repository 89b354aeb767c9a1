//! Content hashing for compiler binaries.
//!
//! A binary's identity is the lowercase hex SHA-256 of its bytes. Files are
//! streamed in fixed-size chunks so large toolchains are never read into
//! memory at once. Nothing is cached: every call re-reads the file.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::HashError;

/// Bytes read per chunk.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Hash the file at `path`.
///
/// # Errors
///
/// Returns `HashError::FileNotFound` if `path` does not exist, or
/// `HashError::Io` if opening or reading fails at any point.
pub fn hash_file(path: impl AsRef<Path>) -> Result<String, HashError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            HashError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HashError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let digest = hash_reader(file).map_err(|source| HashError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %digest, "hashed file");
    Ok(digest)
}

/// Hash everything `reader` yields until EOF.
///
/// `Interrupted` reads are retried; any other error aborts and the partial
/// digest is dropped.
///
/// # Errors
///
/// Returns the first non-`Interrupted` read error.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
