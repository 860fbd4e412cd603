//! Command-line argument definitions.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI entry point for the shelly script renderer.
#[derive(Parser, Debug)]
#[command(
    name = "shelly",
    about = "Render shell-like provisioning scripts to declarative state",
    version
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across subcommands
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Namespace prefixed to every generated state identifier
    #[arg(short, long, global = true)]
    pub sls: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a script and print the resulting state
    Render(RenderOpts),
    /// Parse a script and report problems without printing state
    Check(CheckOpts),
    /// Print version information
    Version,
}

/// Options for the `render` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RenderOpts {
    /// Script to render, or `-` for stdin
    pub file: PathBuf,

    /// Output serialization format
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,
}

/// Options for the `check` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CheckOpts {
    /// Script to check, or `-` for stdin
    pub file: PathBuf,
}

/// Serialization format for rendered state.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Block-style YAML document
    Yaml,
    /// Pretty-printed JSON object
    Json,
}
