//! Directory layout of a freshly scaffolded project.

use crate::error::ScaffoldError;
use crate::report::{Stage, StageReport, StepOutcome};
use std::fs;
use std::path::Path;

/// Subdirectories created under the project root, in creation order
pub const LAYOUT_DIRS: &[&str] = &[
    "backend/config",
    "backend/controllers",
    "backend/models",
    "backend/routes",
    "frontend/src",
    "frontend/public",
];

/// Create every layout directory under `root`.
///
/// Each directory is attempted independently; one failure does not stop the
/// rest. Existing directories are not an error.
pub fn build_layout(root: &Path, dry_run: bool) -> StageReport {
    println!("Creating project folder structure...");
    let mut report = StageReport::new(Stage::Layout);

    for dir in LAYOUT_DIRS {
        let path = root.join(dir);
        let step = format!("create {}", dir);

        if dry_run {
            tracing::info!("[dry-run] would create {}", path.display());
            report.push(StepOutcome::skipped(step));
            continue;
        }

        let result = fs::create_dir_all(&path).map_err(|e| ScaffoldError::io(&path, e));
        match &result {
            Ok(()) => println!("Created folder: {}", path.display()),
            Err(e) => eprintln!("Failed to create folder: {} ({})", path.display(), e),
        }
        report.record(step, result);
    }

    if report.is_success() {
        println!("Folder structure created successfully!");
    }
    report
}
