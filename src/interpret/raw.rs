//! Leading-slash lines: literal command resources.
//!
//! ```text
//! /bin/echo "Doing stuff"
//! /bin/ping -c 4 10.0.0.1
//! ```
//!
//! Direct commands are recognized by starting the line with a slash.

use crate::state::StateMap;

/// Map the whole line to a `cmd.run` resource.
///
/// The tokens are joined back into one literal command string which is
/// both the resource identifier and the command to run. There is no
/// identifier-based merge target: each distinct command string is its own
/// entry. Quoting on the original line is normalized away by the join.
pub(super) fn interpret(tokens: &[String], _sls: &str) -> StateMap {
    let command = tokens.join(" ");
    let mut resources = StateMap::new();
    resources.insert_module(command, "cmd.run", Vec::new());
    resources
}
