//! Subcommand implementations.
pub mod check;
pub mod render;
pub mod version;

use std::fs;
use std::io::Read as _;
use std::path::Path;

use anyhow::{Context as _, Result};

/// Read a script from `file`, or from stdin when `file` is `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or stdin is not valid UTF-8.
pub fn read_script(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("failed to read script from stdin")?;
        Ok(script)
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("failed to read script {}", file.display()))
    }
}
