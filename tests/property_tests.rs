//! Property-based tests for mernkit
//!
//! These tests verify:
//! - Project name resolution invariants
//! - Tool argument construction
//! - Layout idempotence for arbitrary project names

use mernkit::project::{DEFAULT_PROJECT_NAME, ProjectSpec, resolve_project_name};
use mernkit::tool_traits::ToolArgs;
use mernkit::tools::npm::NpmInstallArgs;
use mernkit::{LAYOUT_DIRS, build_layout};
use proptest::prelude::*;
use std::path::Path;

proptest! {
    /// Whitespace-only input always falls back to the default
    #[test]
    fn blank_names_use_default(raw in "[ \t\r\n]*") {
        prop_assert_eq!(resolve_project_name(&raw), DEFAULT_PROJECT_NAME);
    }

    /// A non-blank name survives surrounding whitespace unchanged
    #[test]
    fn names_are_trimmed(
        name in "[A-Za-z0-9_-][A-Za-z0-9 _-]{0,30}[A-Za-z0-9_-]",
        pad in "[ \t]{0,3}",
    ) {
        let raw = format!("{pad}{name}{pad}\n");
        prop_assert_eq!(resolve_project_name(&raw), name.clone());
        let spec = ProjectSpec::from_input(&raw, Path::new("/base"));
        prop_assert_eq!(spec.root_path(), Path::new("/base").join(&name));
    }

    /// `npm install` always leads and package order is preserved
    #[test]
    fn npm_install_preserves_packages(
        packages in prop::collection::vec("[a-z][a-z0-9-]{0,12}", 0..8),
    ) {
        let refs: Vec<&str> = packages.iter().map(String::as_str).collect();
        let args = NpmInstallArgs::new(&refs).to_cli_args();
        prop_assert_eq!(&args[0], "install");
        prop_assert_eq!(&args[1..], &packages[..]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Building the layout any number of times leaves the same tree
    #[test]
    fn layout_is_idempotent(name in "[a-z][a-z0-9-]{0,15}", runs in 1usize..4) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join(&name);
        for _ in 0..runs {
            prop_assert!(build_layout(&root, false).is_success());
        }
        for dir in LAYOUT_DIRS {
            prop_assert!(root.join(dir).is_dir());
        }
    }
}
