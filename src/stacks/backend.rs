//! Backend initializer: npm manifest, dependencies, server entry point and `.env`.

use super::StackContext;
use crate::report::{Stage, StageReport};
use crate::templates::BACKEND_FILES;
use crate::tools::npm::{NpmInitArgs, NpmInstallArgs};
use std::path::Path;

/// Runtime dependencies: web framework, ODM, CORS middleware, env loader
pub const BACKEND_PACKAGES: &[&str] = &["express", "mongoose", "cors", "dotenv"];

/// Initialize the backend stack in `backend_path`
pub fn init_backend(ctx: &StackContext<'_>, backend_path: &Path) -> StageReport {
    println!("Initializing backend...");
    let mut report = StageReport::new(Stage::Backend);

    ctx.tool_step(&mut report, &NpmInitArgs, backend_path);
    ctx.tool_step(&mut report, &NpmInstallArgs::new(BACKEND_PACKAGES), backend_path);

    ctx.templates_step(&mut report, backend_path, BACKEND_FILES);

    if report.is_success() {
        println!("Backend initialized successfully!");
    } else {
        eprintln!("Failed to initialize backend: see summary below");
    }
    report
}
