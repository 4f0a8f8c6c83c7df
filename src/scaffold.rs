//! Scaffold orchestration: root directory, layout, backend, frontend.

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::layout::build_layout;
use crate::preflight::Toolchain;
use crate::project::ProjectSpec;
use crate::report::ScaffoldReport;
use crate::stacks::StackContext;
use crate::stacks::backend::init_backend;
use crate::stacks::frontend::init_frontend;
use std::fs;
use std::path::Path;

/// Scaffold `project` and return what every stage did.
///
/// Failing to create the project root ends the run with `Err`; nothing else
/// can proceed without it. Every later failure is recorded in the report and
/// the remaining stages still run.
pub fn scaffold(
    project: &ProjectSpec,
    config: &ScaffoldConfig,
    toolchain: &Toolchain,
) -> Result<ScaffoldReport> {
    println!("Creating project: {}", project.name());
    let root = project.root_path();

    if config.dry_run {
        tracing::info!("[dry-run] would create {}", root.display());
    } else {
        fs::create_dir_all(root).map_err(|e| ScaffoldError::io(root, e))?;
    }

    let ctx = StackContext::new(toolchain, config);
    let mut report = ScaffoldReport::default();
    report.stages.push(build_layout(root, config.dry_run));
    report.stages.push(init_backend(&ctx, &project.backend_path()));
    report.stages.push(init_frontend(&ctx, &project.frontend_path()));

    tracing::info!(
        "Scaffold of {} finished with {} failed step(s)",
        project.name(),
        report.failure_count()
    );
    Ok(report)
}

/// Print each failed step to stderr. Prints nothing on full success.
pub fn print_summary(report: &ScaffoldReport) {
    if report.is_success() {
        return;
    }
    eprintln!();
    eprintln!("Some steps failed ({}):", report.failure_count());
    for line in report.failure_lines() {
        eprintln!("  • {}", line);
    }
    eprintln!("The files that could be written are in place; review them before continuing.");
}

/// Instructions printed once scaffolding is done.
///
/// `project_dir` is the project directory relative to where the user ran the tool.
pub fn completion_instructions(project_dir: &Path) -> String {
    format!(
        "
To start the project, follow these steps:

Frontend:
1. Navigate to the project folder:
   cd {name}/frontend
2. Start the development server:
   npm run dev

Backend:
1. Navigate to the project folder:
   cd {name}/backend
2. Start the backend server:
   node server.js
  ",
        name = project_dir.display()
    )
}
