//! Type-safe external tool argument contracts.
//!
//! Each invocation of `npm` or `npx` is a struct implementing [`ToolArgs`].
//! The struct is the single source of truth for the command line, so the
//! runner never assembles argument strings by hand.

use strum::Display;

/// The external programs a scaffold run may call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Tool {
    /// Package manager: manifest creation and dependency install
    #[strum(serialize = "npm")]
    PackageManager,
    /// Package runner: executes CLIs shipped in installed packages
    #[strum(serialize = "npx")]
    PackageRunner,
}

/// Trait for typed tool arguments.
///
/// # Contract
///
/// - `tool()`: which program runs. The concrete binary is resolved by the
///   runner from the configured toolchain.
/// - `to_cli_args()`: arguments exactly as the program expects them.
///
/// # Example
///
/// ```ignore
/// use mernkit::tools::npm::NpmInstallArgs;
///
/// let args = NpmInstallArgs::new(&["express", "cors"]);
/// assert_eq!(args.to_cli_args(), ["install", "express", "cors"]);
/// ```
pub trait ToolArgs {
    /// Program this invocation runs
    fn tool(&self) -> Tool;

    /// Convert struct fields to CLI arguments.
    fn to_cli_args(&self) -> Vec<String>;

    /// Command line for logs and error messages, e.g. `npm install cors`
    fn describe(&self) -> String {
        let mut parts = vec![self.tool().to_string()];
        parts.extend(self.to_cli_args());
        parts.join(" ")
    }
}
