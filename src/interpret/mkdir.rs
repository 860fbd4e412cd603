//! `mkdir`: directory resources.
//!
//! ```text
//! mkdir [-m <mode>] <dir>...
//! ```

use crate::error::CommandError;
use crate::state::{Attr, StateMap, sid};

/// Interpret `[-m <mode>] <dir>...`.
///
/// An optional leading `-m <mode>` flag adds a shared `mode` attribute to
/// every directory fragment. One `file.directory` resource is produced per
/// directory.
///
/// # Errors
///
/// [`CommandError::MkdirWithoutArguments`] when no directories remain
/// after flag consumption, [`CommandError::TruncatedFlag`] when `-m` has
/// no value.
pub(super) fn interpret(tokens: &[String], sls: &str) -> Result<StateMap, CommandError> {
    let (mode, dirs): (Option<&str>, &[String]) = match tokens.split_first() {
        Some((flag, rest)) if flag == "-m" => {
            let Some((mode, dirs)) = rest.split_first() else {
                return Err(CommandError::TruncatedFlag {
                    flag: "-m".to_string(),
                });
            };
            (Some(mode.as_str()), dirs)
        }
        _ => (None, tokens),
    };

    if dirs.is_empty() {
        return Err(CommandError::MkdirWithoutArguments);
    }

    let mut resources = StateMap::new();
    for dir in dirs {
        let mut attrs = vec![Attr::str("name", dir)];
        if let Some(mode) = mode {
            attrs.push(Attr::str("mode", mode));
        }
        resources.insert_module(sid::generate(sls, "file", dir), "file.directory", attrs);
    }
    Ok(resources)
}
