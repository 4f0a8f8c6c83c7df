//! Type-safe arguments for the Tailwind CSS CLI, run through `npx`.

use crate::tool_traits::{Tool, ToolArgs};

/// `npx tailwindcss init -p`: scaffolds `tailwind.config.js` and
/// `postcss.config.js`.
#[derive(Debug, Clone, Copy)]
pub struct TailwindInitArgs;

impl ToolArgs for TailwindInitArgs {
    fn tool(&self) -> Tool {
        Tool::PackageRunner
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec!["tailwindcss".to_string(), "init".to_string(), "-p".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailwind_init_args() {
        assert_eq!(TailwindInitArgs.to_cli_args(), vec!["tailwindcss", "init", "-p"]);
        assert_eq!(TailwindInitArgs.describe(), "npx tailwindcss init -p");
    }
}
