//! Stack initializers: the backend service and the frontend client.
//!
//! Each initializer is a straight line of steps. A failed tool step is
//! recorded and the initializer moves on; a failed file write is recorded
//! and ends the initializer, since later files would land in the same
//! broken tree.

pub mod backend;
pub mod frontend;

use crate::config::ScaffoldConfig;
use crate::preflight::Toolchain;
use crate::report::{StageReport, StepOutcome};
use crate::templates::TemplateFile;
use crate::tool_runner::run_tool;
use crate::tool_traits::ToolArgs;
use crate::writer::{write_file, write_templates};
use std::path::Path;

/// Shared inputs for running a stack's steps
#[derive(Debug, Clone, Copy)]
pub struct StackContext<'a> {
    pub toolchain: &'a Toolchain,
    pub config: &'a ScaffoldConfig,
}

impl<'a> StackContext<'a> {
    pub fn new(toolchain: &'a Toolchain, config: &'a ScaffoldConfig) -> Self {
        Self { toolchain, config }
    }

    /// Run one tool step and record it. Never stops the stage.
    pub fn tool_step<T: ToolArgs>(&self, report: &mut StageReport, args: &T, cwd: &Path) {
        let step = args.describe();
        if self.config.tools_disabled() {
            tracing::info!("Skipping `{}` in {}", step, cwd.display());
            report.push(StepOutcome::skipped(step));
            return;
        }
        let result = run_tool(self.toolchain, args, cwd);
        report.record(step, result);
    }

    /// Write a template table and record it. Returns false if the stage should stop.
    pub fn templates_step(
        &self,
        report: &mut StageReport,
        base: &Path,
        files: &[TemplateFile],
    ) -> bool {
        let names: Vec<&str> = files.iter().map(|f| f.relative_path).collect();
        let step = format!("write {}", names.join(", "));
        let result = write_templates(base, files, self.config.dry_run).map(|_| ());
        let ok = result.is_ok();
        report.record(step, result);
        ok
    }

    /// Write a single generated file and record it. Returns false if the stage should stop.
    pub fn file_step(&self, report: &mut StageReport, path: &Path, content: &str) -> bool {
        let file_name = path.file_name().map(|n| n.to_string_lossy());
        let step = format!("write {}", file_name.unwrap_or_default());
        let result = write_file(path, content, self.config.dry_run);
        let ok = result.is_ok();
        report.record(step, result);
        ok
    }
}
