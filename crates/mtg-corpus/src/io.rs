//! Bounded reads and atomic writes for corpus files

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Maximum size of a single corpus file (10 MB)
const MAX_CORPUS_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a file with a size limit so a stray large file cannot exhaust memory.
pub(crate) fn read_file_bounded(path: &Path) -> std::io::Result<String> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_CORPUS_FILE_SIZE {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "File too large ({} bytes, limit is {} bytes)",
                metadata.len(),
                MAX_CORPUS_FILE_SIZE
            ),
        ));
    }
    fs::read_to_string(path)
}

/// Write content via a temp file in the same directory, then rename.
pub(crate) fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.sync_all()?;

    fs::rename(&temp_path, path)
}
