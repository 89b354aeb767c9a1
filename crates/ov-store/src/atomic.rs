//! Whole-file replacement through a sibling temporary file.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `path` with `contents`.
///
/// The bytes are written and synced to a temporary file in the same
/// directory, which is then renamed over `path`. If any step fails the
/// temporary file is removed and `path` keeps its previous contents.
///
/// # Errors
///
/// Returns the underlying I/O error (missing parent directory, permission
/// denied, disk full, rename onto a directory, ...).
pub fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
