//! Whole-file reads and overwriting report writes

use std::path::Path;

/// Read a file as raw bytes
pub fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Read a file as text, replacing invalid UTF-8 with U+FFFD
pub fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Overwrite `path` with `text`, creating parent directories
///
/// The file is truncated and rewritten in place; a crash mid-write can
/// leave it partially written.
pub fn write_report(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, text)
}
