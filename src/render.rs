//! The render pass: script text in, ordered state mapping out.

use crate::error::RenderError;
use crate::interpret::{self, RAW_VERB};
use crate::lexer;
use crate::state::{StateMap, merge};

/// Translate a shelly script into an ordered state mapping.
///
/// Lines are processed in order: tokenize, look up the leading verb in the
/// dispatch table, interpret, and fold the produced fragment into the
/// accumulated result. Lines whose verb is not recognized are skipped
/// silently, as are blank and comment-only lines. A leading `#!`
/// interpreter line is discarded before processing, and a line beginning
/// with `/` runs through the raw-command interpreter.
///
/// The returned map iterates resources in the order they first appeared
/// in the script. The namespace `sls` prefixes every generated
/// identifier and may be empty.
///
/// # Examples
///
/// ```
/// use shelly_cli::render::render;
///
/// let states = render("yum install nginx\nsystemctl start nginx\n", "").unwrap();
/// let ids: Vec<&str> = states.ids().collect();
/// assert_eq!(ids, [".pkg.nginx", ".svc.nginx"]);
/// ```
///
/// # Errors
///
/// Fails with [`RenderError::Script`] when a line cannot be lexed or
/// [`RenderError::Command`] when an interpreter rejects its tokens. The
/// pass aborts on the first failing line; no partial result is returned.
pub fn render(script: &str, sls: &str) -> Result<StateMap, RenderError> {
    let (body, skipped) = strip_shebang(script);
    let mut result = StateMap::new();

    for (idx, line) in body.lines().enumerate() {
        let lineno = idx + 1 + skipped;
        let tokens =
            lexer::split(line).map_err(|source| RenderError::Script { line: lineno, source })?;
        let Some((first, rest)) = tokens.split_first() else {
            continue;
        };

        // A leading slash selects the raw-command interpreter, which
        // consumes every token on the line.
        let (verb, args) = if line.starts_with('/') {
            (RAW_VERB, tokens.as_slice())
        } else {
            (first.as_str(), rest)
        };

        let Some(command) = interpret::lookup(verb) else {
            tracing::debug!("line {lineno}: unrecognized command '{verb}', skipping");
            continue;
        };

        let fragment = command
            .interpret(args, sls)
            .map_err(|source| RenderError::Command {
                line: lineno,
                verb: verb.to_string(),
                source,
            })?;
        merge::merge(fragment, &mut result);
    }

    Ok(result)
}

/// Drop a leading `#!...` interpreter line, if present.
///
/// Returns the remaining body and the number of lines skipped, so error
/// line numbers keep referring to the original text.
fn strip_shebang(script: &str) -> (&str, usize) {
    if script.starts_with("#!") {
        script
            .split_once('\n')
            .map_or(("", 1), |(_, rest)| (rest, 1))
    } else {
        (script, 0)
    }
}
