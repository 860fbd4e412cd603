//! `yum` / `apt-get`: package installation resources.
//!
//! ```text
//! yum install <package>...
//! ```
//!
//! Only installation is supported; every produced fragment uses
//! `pkg.installed`.

use super::is_name;
use crate::error::CommandError;
use crate::state::{Attr, StateMap, sid};

/// Interpret `install <package>...`.
///
/// The first token is the package-manager subcommand and is not itself a
/// package. Every following token that looks like a bare package name
/// produces one `pkg.installed` resource; anything else (versions, flags,
/// URLs) is ignored. No matching tokens yields an empty fragment, not an
/// error.
pub(super) fn interpret(tokens: &[String], sls: &str) -> Result<StateMap, CommandError> {
    let mut resources = StateMap::new();
    let Some((_subcommand, rest)) = tokens.split_first() else {
        return Ok(resources);
    };

    for name in rest.iter().filter(|t| is_name(t)) {
        resources.insert_module(
            sid::generate(sls, "pkg", name),
            "pkg.installed",
            vec![Attr::str("name", name)],
        );
    }
    Ok(resources)
}
