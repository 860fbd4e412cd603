//! `curl`: managed-file resources with optional templating.
//!
//! ```text
//! curl salt://dir/file.j2 | jinja2 > /tmp/file
//! ```
//!
//! Permissions and ownership set by later `chown`/`chmod`-style lines
//! merge into the same resource, since the destination path fixes the
//! fragment's identifier.

use super::Cursor;
use crate::error::CommandError;
use crate::state::{Attr, StateMap, sid};

/// Interpret a curl token stream.
///
/// The stream is scanned left to right: a bare token becomes a `source`
/// attribute, `|` consumes the next token as a `template` attribute, and
/// `>` consumes the next token as the destination path, emitting a
/// `name` attribute and fixing the fragment's identifier. Produces a
/// single `file.managed` resource.
///
/// # Errors
///
/// [`CommandError::CurlWithoutTarget`] when the stream ends before a `>`
/// redirect was seen, [`CommandError::TruncatedFlag`] when `|` or `>` has
/// nothing after it.
pub(super) fn interpret(tokens: &[String], sls: &str) -> Result<StateMap, CommandError> {
    let mut attrs = Vec::new();
    let mut target = None;
    let mut cur = Cursor::new(tokens);

    while let Some(token) = cur.next() {
        match token {
            "|" => attrs.push(Attr::str("template", cur.value_for("|")?)),
            ">" => {
                let name = cur.value_for(">")?;
                attrs.push(Attr::str("name", name));
                target = Some(sid::generate(sls, "file", name));
            }
            source => attrs.push(Attr::str("source", source)),
        }
    }

    let Some(id) = target else {
        return Err(CommandError::CurlWithoutTarget);
    };
    let mut resources = StateMap::new();
    resources.insert_module(id, "file.managed", attrs);
    Ok(resources)
}
