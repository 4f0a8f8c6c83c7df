//! Type-safe arguments for `npm` invocations.

use crate::tool_traits::{Tool, ToolArgs};

// ============================================================================
// Init
// ============================================================================

/// `npm init -y`: creates a `package.json` in the working directory,
/// accepting every default without asking.
#[derive(Debug, Clone, Copy)]
pub struct NpmInitArgs;

impl ToolArgs for NpmInitArgs {
    fn tool(&self) -> Tool {
        Tool::PackageManager
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec!["init".to_string(), "-y".to_string()]
    }
}

// ============================================================================
// Install
// ============================================================================

/// `npm install <packages...>`: adds runtime dependencies to the manifest.
///
/// Packages are passed positionally, in the order given.
#[derive(Debug, Clone)]
pub struct NpmInstallArgs {
    pub packages: Vec<String>,
}

impl NpmInstallArgs {
    pub fn new(packages: &[&str]) -> Self {
        Self {
            packages: packages.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ToolArgs for NpmInstallArgs {
    fn tool(&self) -> Tool {
        Tool::PackageManager
    }

    fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        args.extend(self.packages.iter().cloned());
        args
    }
}
