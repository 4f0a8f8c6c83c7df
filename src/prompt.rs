//! Interactive project-name prompt.
//!
//! The reader and writer are borrowed for a single question and released
//! when the call returns, so no input handle outlives the prompt.

use crate::error::{Result, ScaffoldError};
use crate::project::resolve_project_name;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter your project name: ";

/// Ask for a project name and return it with the default applied.
///
/// End of input counts as a blank answer. Bytes that are not valid UTF-8
/// are replaced rather than rejected.
pub fn ask_project_name<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| ScaffoldError::prompt(format!("failed to write prompt: {}", e)))?;

    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .map_err(|e| ScaffoldError::prompt(format!("failed to read project name: {}", e)))?;

    let name = resolve_project_name(&String::from_utf8_lossy(&line));
    tracing::debug!("Resolved project name: {}", name);
    Ok(name)
}
