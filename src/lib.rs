//! mernkit library
//!
//! Core scaffolding for the `mernkit` command: project layout, template
//! tables, external tool invocation and per-stage reporting.

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod preflight;
pub mod project;
pub mod prompt;
pub mod report;
pub mod scaffold;
pub mod stacks;
pub mod templates;
pub mod tool_runner;
pub mod tool_traits;
pub mod tools;
pub mod writer;

// Re-export main types for convenience
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use layout::{LAYOUT_DIRS, build_layout};
pub use preflight::Toolchain;
pub use project::{DEFAULT_PROJECT_NAME, ProjectSpec};
pub use report::{ScaffoldReport, Stage, StageReport, StepOutcome, StepStatus};
pub use templates::{PackageManifest, TemplateFile};
pub use tool_runner::run_tool;
pub use tool_traits::{Tool, ToolArgs};
