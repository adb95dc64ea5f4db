use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

/// Copy the static passthrough tree byte-for-byte into `<output>/static/`,
/// preserving relative structure. Returns the number of files copied; a
/// missing static directory copies nothing.
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    if !static_dir.exists() {
        return Ok(copied);
    }
    for entry in WalkDir::new(static_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let rel = entry.path().strip_prefix(static_dir).unwrap_or(entry.path());
        let dest = output_dir.join("static").join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        copied += 1;
    }
    Ok(copied)
}
