//! The `render` subcommand.
use anyhow::{Context as _, Result};

use crate::cli::{Format, GlobalOpts, RenderOpts};
use crate::render::render;
use crate::state::StateMap;

/// Run the render command: read the script, translate it, and print the
/// resulting state document to stdout.
///
/// # Errors
///
/// Returns an error if the script cannot be read, fails to render, or the
/// result cannot be serialized.
pub fn run(global: &GlobalOpts, opts: &RenderOpts) -> Result<()> {
    let script = super::read_script(&opts.file)?;
    let sls = global.sls.as_deref().unwrap_or_default();

    let states = render(&script, sls)
        .with_context(|| format!("failed to render {}", opts.file.display()))?;
    tracing::debug!("rendered {} resource(s)", states.len());

    let document = serialize(&states, opts.format)?;
    #[allow(clippy::print_stdout)]
    {
        println!("{document}");
    }
    Ok(())
}

/// Serialize a state mapping to the requested output format.
///
/// YAML output omits the trailing newline serde_yaml appends so the
/// caller can print it uniformly.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize(states: &StateMap, format: Format) -> Result<String> {
    match format {
        Format::Yaml => {
            let doc = serde_yaml::to_string(states).context("failed to serialize state as YAML")?;
            Ok(doc.trim_end().to_string())
        }
        Format::Json => {
            serde_json::to_string_pretty(states).context("failed to serialize state as JSON")
        }
    }
}
