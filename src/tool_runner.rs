//! Type-safe external tool execution
//!
//! `run_tool` is the single place a scaffold run spawns processes. The child
//! inherits stdin, stdout and stderr so npm's progress reaches the user as
//! it happens, and the call blocks until the child exits.

use crate::error::{Result, ScaffoldError};
use crate::preflight::Toolchain;
use crate::tool_traits::ToolArgs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a tool invocation in `cwd` and wait for it.
///
/// # Errors
///
/// - `ToolMissing` if the program was not resolved or cannot be spawned
/// - `Io` if `cwd` is not a directory
/// - `ToolFailed` if the program exits unsuccessfully
pub fn run_tool<T: ToolArgs>(toolchain: &Toolchain, args: &T, cwd: &Path) -> Result<()> {
    let resolved = toolchain.get(args.tool());
    let command_line = args.describe();

    let program = resolved
        .path
        .as_ref()
        .ok_or_else(|| ScaffoldError::ToolMissing(resolved.name.clone()))?;

    // Checked up front so a missing directory is not reported as a missing tool
    if !cwd.is_dir() {
        return Err(ScaffoldError::io(
            cwd,
            std::io::Error::new(ErrorKind::NotFound, "working directory does not exist"),
        ));
    }

    tracing::info!("run_tool: {} (cwd={})", command_line, cwd.display());

    let status = Command::new(program)
        .args(args.to_cli_args())
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ScaffoldError::ToolMissing(resolved.name.clone()),
            _ => ScaffoldError::tool_failed(&command_line, format!("failed to spawn: {}", e)),
        })?;

    if status.success() {
        tracing::info!("{} finished successfully", command_line);
        Ok(())
    } else {
        let reason = match status.code() {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        Err(ScaffoldError::tool_failed(command_line, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preflight::ResolvedTool;
    use crate::tool_traits::Tool;

    struct ShArgs(&'static str);

    impl ToolArgs for ShArgs {
        fn tool(&self) -> Tool {
            Tool::PackageManager
        }

        fn to_cli_args(&self) -> Vec<String> {
            vec!["-c".to_string(), self.0.to_string()]
        }
    }

    fn missing(name: &str) -> ResolvedTool {
        ResolvedTool {
            name: name.to_string(),
            path: None,
        }
    }

    #[test]
    fn test_unresolved_tool_is_missing() {
        let toolchain = Toolchain::from_parts(missing("npm"), missing("npx"));
        let tmp = tempfile::tempdir().unwrap();

        let err = run_tool(&toolchain, &ShArgs("true"), tmp.path()).unwrap_err();

        assert!(matches!(err, ScaffoldError::ToolMissing(ref name) if name == "npm"));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;

        fn sh_toolchain() -> Toolchain {
            let sh = ResolvedTool {
                name: "sh".to_string(),
                path: Some(which::which("sh").unwrap()),
            };
            Toolchain::from_parts(sh, missing("npx"))
        }

        #[test]
        fn test_success_in_cwd() {
            let tmp = tempfile::tempdir().unwrap();

            run_tool(&sh_toolchain(), &ShArgs("touch marker"), tmp.path()).unwrap();

            assert!(tmp.path().join("marker").exists());
        }

        #[test]
        fn test_nonzero_exit_is_tool_failure() {
            let tmp = tempfile::tempdir().unwrap();

            let err = run_tool(&sh_toolchain(), &ShArgs("exit 3"), tmp.path()).unwrap_err();

            assert!(err.is_tool_error());
            assert!(err.to_string().contains("exit code 3"));
        }

        #[test]
        fn test_missing_cwd_is_io_error() {
            let tmp = tempfile::tempdir().unwrap();
            let gone = tmp.path().join("nope");

            let err = run_tool(&sh_toolchain(), &ShArgs("true"), &gone).unwrap_err();

            assert!(matches!(err, ScaffoldError::Io { .. }));
        }
    }
}
