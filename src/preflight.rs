//! Pre-flight tool resolution
//!
//! Looks up the package manager and package runner on PATH before any stage
//! runs. A missing tool is reported but never fatal: the steps that need it
//! fail on their own and file writes still happen.

use crate::config::ScaffoldConfig;
use crate::tool_traits::Tool;
use std::path::PathBuf;

/// Resolved external programs for one run
#[derive(Debug, Clone, Default)]
pub struct Toolchain {
    npm: ResolvedTool,
    npx: ResolvedTool,
}

/// A configured program name and where it was found, if anywhere
#[derive(Debug, Clone, Default)]
pub struct ResolvedTool {
    pub name: String,
    pub path: Option<PathBuf>,
}

impl ResolvedTool {
    fn resolve(name: &str) -> Self {
        let path = match which::which(name) {
            Ok(path) => {
                tracing::debug!("Resolved {} to {}", name, path.display());
                Some(path)
            }
            Err(e) => {
                tracing::debug!("Could not resolve {}: {}", name, e);
                None
            }
        };
        Self {
            name: name.to_string(),
            path,
        }
    }
}

impl Toolchain {
    /// Resolve every configured program on PATH
    pub fn resolve(config: &ScaffoldConfig) -> Self {
        Self {
            npm: ResolvedTool::resolve(&config.npm),
            npx: ResolvedTool::resolve(&config.npx),
        }
    }

    /// Build a toolchain from explicit locations, skipping PATH lookup
    pub fn from_parts(npm: ResolvedTool, npx: ResolvedTool) -> Self {
        Self { npm, npx }
    }

    pub fn get(&self, tool: Tool) -> &ResolvedTool {
        match tool {
            Tool::PackageManager => &self.npm,
            Tool::PackageRunner => &self.npx,
        }
    }

    /// Names of configured programs that were not found
    pub fn missing(&self) -> Vec<&str> {
        [&self.npm, &self.npx]
            .into_iter()
            .filter(|t| t.path.is_none())
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Print a warning for each missing tool
    pub fn warn_missing(&self) {
        let missing = self.missing();
        if missing.is_empty() {
            tracing::info!("Pre-flight checks passed: all tools present");
            return;
        }
        for name in &missing {
            tracing::warn!("Tool not found on PATH: {}", name);
            eprintln!("Warning: `{}` was not found on PATH; steps that need it will fail.", name);
        }
        eprintln!("Install Node.js (which provides npm and npx) to have dependencies installed.");
    }
}
