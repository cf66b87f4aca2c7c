//! Atomic file copy implementation

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Copy a file atomically using the write-then-rename strategy
///
/// 1. Write to a hidden `.{name}.part` sibling of `dest`
/// 2. Flush and sync to disk
/// 3. Preserve metadata (permissions, mtime)
/// 4. Rename over the final destination
///
/// The parent directory of `dest` must already exist; it is never created.
/// If any step fails the partial file is removed.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(io::Error)` - the first failing operation
///
/// # Example
/// ```no_run
/// use filemove::executor::copy_file_atomic;
/// use std::path::Path;
///
/// let bytes = copy_file_atomic(
///     Path::new("translations/en.lproj/Localizable.strings"),
///     Path::new("project/Namdo/en.lproj/Localizable.strings"),
/// )?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn copy_file_atomic(src: &Path, dest: &Path) -> io::Result<u64> {
    // Open the source first so a missing source never leaves a .part behind
    let mut src_file = File::open(src)?;
    let part_path = part_path_for(dest);

    let result = write_part(&mut src_file, src, &part_path)
        .and_then(|bytes| fs::rename(&part_path, dest).map(|()| bytes));

    if result.is_err() && fs::symlink_metadata(&part_path).is_ok() {
        let _ = fs::remove_file(&part_path);
    }
    result
}

fn write_part(src_file: &mut File, src: &Path, part_path: &Path) -> io::Result<u64> {
    let mut part_file = File::create(part_path)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        part_file.write_all(&buffer[..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    fs::set_permissions(part_path, src_metadata.permissions())?;
    let mtime = filetime::FileTime::from_system_time(src_metadata.modified()?);
    filetime::set_file_mtime(part_path, mtime)?;

    Ok(total_bytes)
}

/// Temporary path used while `dest` is being written
pub fn part_path_for(dest: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = dest.file_name() {
        name.push(file_name);
    }
    name.push(".part");
    dest.with_file_name(name)
}
