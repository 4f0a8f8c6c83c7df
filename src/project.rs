//! Project identity: the resolved name and the root directory it lives in.

use std::path::{Component, Path, PathBuf};

/// Name used when the user gives none
pub const DEFAULT_PROJECT_NAME: &str = "mern-project";

/// A project to scaffold. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    root_path: PathBuf,
}

impl ProjectSpec {
    /// Build a project from raw user input, placing the project under `base_dir`.
    ///
    /// Blank input falls back to [`DEFAULT_PROJECT_NAME`]. The name is
    /// always nested under `base_dir`, even when it looks absolute.
    pub fn from_input(raw: &str, base_dir: &Path) -> Self {
        let name = resolve_project_name(raw);
        let root_path = base_dir.join(relative_project_dir(&name));
        Self { name, root_path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project directory relative to the base dir, as shown in instructions
    pub fn relative_dir(&self) -> PathBuf {
        relative_project_dir(&self.name)
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// `<root>/backend`
    pub fn backend_path(&self) -> PathBuf {
        self.root_path.join("backend")
    }

    /// `<root>/frontend`
    pub fn frontend_path(&self) -> PathBuf {
        self.root_path.join("frontend")
    }
}

/// Trim surrounding whitespace and apply the default for blank input
pub fn resolve_project_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Drop root and prefix components so `name` can only extend a base path
fn relative_project_dir(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
        .collect()
}
