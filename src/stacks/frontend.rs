//! Frontend initializer: npm manifest, dependencies, Tailwind config and
//! the React entry files.

use super::StackContext;
use crate::report::{Stage, StageReport};
use crate::templates::{FRONTEND_BUILD_CONFIG, FRONTEND_FILES, MANIFEST_FILE, PackageManifest};
use crate::tools::npm::{NpmInitArgs, NpmInstallArgs};
use crate::tools::tailwind::TailwindInitArgs;
use std::path::Path;

/// UI library, bundler, CSS framework and its PostCSS tooling, toast library
pub const FRONTEND_PACKAGES: &[&str] = &[
    "react",
    "react-dom",
    "vite",
    "tailwindcss",
    "postcss",
    "autoprefixer",
    "toastify-js",
];

/// Initialize the frontend stack in `frontend_path`
pub fn init_frontend(ctx: &StackContext<'_>, frontend_path: &Path) -> StageReport {
    println!("Initializing frontend...");
    let mut report = StageReport::new(Stage::Frontend);

    ctx.tool_step(&mut report, &NpmInitArgs, frontend_path);
    ctx.tool_step(&mut report, &NpmInstallArgs::new(FRONTEND_PACKAGES), frontend_path);

    if write_steps(ctx, &mut report, frontend_path) && report.is_success() {
        println!("Frontend initialized successfully!");
    } else {
        eprintln!("Failed to initialize frontend: see summary below");
    }
    report
}

fn write_steps(ctx: &StackContext<'_>, report: &mut StageReport, frontend_path: &Path) -> bool {
    let manifest = match PackageManifest::frontend().to_json() {
        Ok(json) => json,
        Err(e) => {
            report.record(format!("write {}", MANIFEST_FILE), Err(e.into()));
            return false;
        }
    };
    if !ctx.file_step(report, &frontend_path.join(MANIFEST_FILE), &manifest) {
        return false;
    }

    ctx.tool_step(report, &TailwindInitArgs, frontend_path);

    // The Tailwind config goes last so it replaces the one `tailwindcss init` generated
    ctx.templates_step(report, frontend_path, FRONTEND_FILES)
        && ctx.templates_step(report, frontend_path, FRONTEND_BUILD_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldConfig;
    use crate::preflight::{ResolvedTool, Toolchain};
    use std::fs;

    fn no_tools() -> Toolchain {
        let missing = |name: &str| ResolvedTool {
            name: name.to_string(),
            path: None,
        };
        Toolchain::from_parts(missing("npm"), missing("npx"))
    }

    fn frontend_dir() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        tmp
    }

    #[test]
    fn test_manifest_overwrites_generated_one() {
        let tmp = frontend_dir();
        fs::write(tmp.path().join("package.json"), r#"{"name":"generated"}"#).unwrap();
        let config = ScaffoldConfig {
            skip_install: true,
            ..Default::default()
        };
        let toolchain = no_tools();

        let report = init_frontend(&StackContext::new(&toolchain, &config), tmp.path());

        assert!(report.is_success());
        let json = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        let manifest: PackageManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, PackageManifest::frontend());
    }

    #[test]
    fn test_all_files_written_when_tools_missing() {
        let tmp = frontend_dir();
        let config = ScaffoldConfig::default();
        let toolchain = no_tools();

        let report = init_frontend(&StackContext::new(&toolchain, &config), tmp.path());

        // npm init, npm install, npx tailwindcss init
        assert_eq!(report.failures().count(), 3);
        for file in FRONTEND_FILES.iter().chain(FRONTEND_BUILD_CONFIG) {
            let written = fs::read_to_string(tmp.path().join(file.relative_path)).unwrap();
            assert_eq!(written, file.content, "{} differs", file.relative_path);
        }
    }

    #[test]
    fn test_missing_src_dir_stops_after_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig {
            skip_install: true,
            ..Default::default()
        };
        let toolchain = no_tools();

        let report = init_frontend(&StackContext::new(&toolchain, &config), tmp.path());

        assert_eq!(report.failures().count(), 1);
        assert!(tmp.path().join("package.json").exists());
        assert!(!tmp.path().join("tailwind.config.js").exists());
    }
}
