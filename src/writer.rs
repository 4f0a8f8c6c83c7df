//! Writes template tables to disk.

use crate::error::{Result, ScaffoldError};
use crate::templates::TemplateFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `content` to `path`, replacing any existing file
pub fn write_file(path: &Path, content: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        tracing::info!("[dry-run] would write {} ({} bytes)", path.display(), content.len());
        return Ok(());
    }
    fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Write every template below `base`, stopping at the first failure.
///
/// Returns the paths written so far on success.
pub fn write_templates(base: &Path, files: &[TemplateFile], dry_run: bool) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = base.join(file.relative_path);
        write_file(&path, file.content, dry_run)?;
        written.push(path);
    }
    Ok(written)
}
