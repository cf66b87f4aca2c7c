//! Hashing utilities for `--verify` and dry-run comparisons

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Compute the Blake3 hash of a file, streamed in 64KB chunks.
///
/// # Example
/// ```no_run
/// use filemove::hash::compute_hash;
/// use std::path::Path;
///
/// let hash = compute_hash(Path::new("Localizable.strings"))?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn compute_hash(file_path: &Path) -> io::Result<[u8; 32]> {
    let mut file = File::open(file_path)?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; 64 * 1024];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(*hasher.finalize().as_bytes())
}

/// True if both files exist and hash the same.
///
/// Sizes are compared first so differently sized files are never read.
pub fn files_match(a: &Path, b: &Path) -> io::Result<bool> {
    if std::fs::metadata(a)?.len() != std::fs::metadata(b)?.len() {
        return Ok(false);
    }
    Ok(compute_hash(a)? == compute_hash(b)?)
}
