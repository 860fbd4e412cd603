//! `useradd`: user resources.
//!
//! ```text
//! useradd -d /opt/influxdb -s /bin/bash -c InfluxDBServiceUser influxdb
//! ```
//!
//! The usual useradd flags apply: `-d` for the home directory, `-s` for
//! the shell, `-c` for the comment or full name.

use super::Cursor;
use crate::error::CommandError;
use crate::state::{Attr, StateMap, sid};

/// Interpret a useradd token stream.
///
/// Each recognized flag consumes one following token as its attribute
/// value (`home`, `shell`, `fullname`); a bare token appends a `name`
/// attribute and fixes the fragment's identifier. Produces a single
/// `user.present` resource.
///
/// # Errors
///
/// [`CommandError::UseraddWithoutName`] when no bare token names the
/// user, [`CommandError::TruncatedFlag`] when a flag has no value.
pub(super) fn interpret(tokens: &[String], sls: &str) -> Result<StateMap, CommandError> {
    let mut attrs = Vec::new();
    let mut target = None;
    let mut cur = Cursor::new(tokens);

    while let Some(token) = cur.next() {
        match token {
            "-d" => attrs.push(Attr::str("home", cur.value_for("-d")?)),
            "-s" => attrs.push(Attr::str("shell", cur.value_for("-s")?)),
            "-c" => attrs.push(Attr::str("fullname", cur.value_for("-c")?)),
            name => {
                attrs.push(Attr::str("name", name));
                target = Some(sid::generate(sls, "user", name));
            }
        }
    }

    let Some(id) = target else {
        return Err(CommandError::UseraddWithoutName);
    };
    let mut resources = StateMap::new();
    resources.insert_module(id, "user.present", attrs);
    Ok(resources)
}
