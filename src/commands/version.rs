//! Command: print version information.

/// Print the shelly version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    let version = option_env!("SHELLY_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    println!("shelly {version}");
}
