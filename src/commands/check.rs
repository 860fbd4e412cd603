//! The `check` subcommand.
use anyhow::Result;

use crate::cli::{CheckOpts, GlobalOpts};
use crate::render::render;

/// Run the check command: render the script for errors, report the
/// resource count, and discard the result.
///
/// # Errors
///
/// Returns an error if the script cannot be read or fails to render.
pub fn run(global: &GlobalOpts, opts: &CheckOpts) -> Result<()> {
    let script = super::read_script(&opts.file)?;
    let sls = global.sls.as_deref().unwrap_or_default();

    match render(&script, sls) {
        Ok(states) => {
            tracing::info!(
                "{}: ok, {} resource(s)",
                opts.file.display(),
                states.len()
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!("{}: {err}", opts.file.display());
            Err(err.into())
        }
    }
}
