//! Run configuration: which binaries to call and how much to do.
//!
//! Values come from, lowest precedence first: built-in defaults, an optional
//! JSON file (`--config`), environment variables, then CLI flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Overrides the package manager binary
pub const ENV_NPM: &str = "MERNKIT_NPM";
/// Overrides the package runner binary
pub const ENV_NPX: &str = "MERNKIT_NPX";

/// Scaffold run configuration that can be loaded from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Package manager program name or path
    pub npm: String,
    /// Package runner program name or path
    pub npx: String,
    /// Write files but run no external tools
    pub skip_install: bool,
    /// Log every action without touching disk or spawning processes
    pub dry_run: bool,
    /// Exit non-zero when any step failed
    pub strict: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            npm: "npm".to_string(),
            npx: "npx".to_string(),
            skip_install: false,
            dry_run: false,
            strict: false,
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Apply `MERNKIT_NPM` / `MERNKIT_NPX` from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup. Blank values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(npm) = lookup(ENV_NPM).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("{} overrides package manager: {}", ENV_NPM, npm);
            self.npm = npm;
        }
        if let Some(npx) = lookup(ENV_NPX).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("{} overrides package runner: {}", ENV_NPX, npx);
            self.npx = npx;
        }
    }

    /// True when no external tool will be spawned
    pub fn tools_disabled(&self) -> bool {
        self.skip_install || self.dry_run
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.npm.trim().is_empty() {
            anyhow::bail!("Package manager program must not be empty");
        }
        if self.npx.trim().is_empty() {
            anyhow::bail!("Package runner program must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.npm, "npm");
        assert_eq!(config.npx, "npx");
        assert!(!config.tools_disabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_json_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{ "npm": "/opt/node/bin/npm", "strict": true }"#)
            .unwrap();
        temp_file.flush().unwrap();

        let config = ScaffoldConfig::load_from_file(temp_file.path()).unwrap();

        assert_eq!(config.npm, "/opt/node/bin/npm");
        assert_eq!(config.npx, "npx");
        assert!(config.strict);
        assert!(!config.skip_install);
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ not json").unwrap();
        temp_file.flush().unwrap();

        assert!(ScaffoldConfig::load_from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = ScaffoldConfig::load_from_file("/nonexistent/mernkit.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(ENV_NPM, "pnpm"), (ENV_NPX, "  ")].into_iter().collect();
        let mut config = ScaffoldConfig::default();

        config.apply_env_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.npm, "pnpm");
        assert_eq!(config.npx, "npx", "blank override is ignored");
    }

    #[test]
    fn test_validate_rejects_empty_program() {
        let config = ScaffoldConfig {
            npm: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tools_disabled() {
        let skip = ScaffoldConfig {
            skip_install: true,
            ..Default::default()
        };
        let dry = ScaffoldConfig {
            dry_run: true,
            ..Default::default()
        };
        assert!(skip.tools_disabled());
        assert!(dry.tools_disabled());
    }
}
