//! `chown`: ownership attributes for files and directories.
//!
//! ```text
//! chown <user>:<group> <path>...
//! chown <user>.<group> <path>...
//! ```
//!
//! The produced `file.directory` fragments share identifiers with `mkdir`
//! and `curl` output, so a chown on a fetched file folds into the
//! managed-file resource during merging.

use crate::error::CommandError;
use crate::state::{Attr, StateMap, sid};

/// Interpret `<user>:<group> <path>...`.
///
/// # Errors
///
/// [`CommandError::ChownUsage`] when the first token is not an owner
/// pair, [`CommandError::ChownWithoutArguments`] when no paths follow.
pub(super) fn interpret(tokens: &[String], sls: &str) -> Result<StateMap, CommandError> {
    let Some((owner, paths)) = tokens.split_first() else {
        return Err(CommandError::ChownUsage);
    };
    let Some((user, group)) = parse_owner(owner) else {
        return Err(CommandError::ChownUsage);
    };
    if paths.is_empty() {
        return Err(CommandError::ChownWithoutArguments);
    }

    let mut resources = StateMap::new();
    for path in paths {
        resources.insert_module(
            sid::generate(sls, "file", path),
            "file.directory",
            vec![
                Attr::str("name", path),
                Attr::str("user", user),
                Attr::str("group", group),
            ],
        );
    }
    Ok(resources)
}

/// Parse `user:group` or `user.group` where both sides are word
/// characters only.
fn parse_owner(token: &str) -> Option<(&str, &str)> {
    let at = token.find([':', '.'])?;
    let user = token.get(..at)?;
    let group = token.get(at + 1..)?;
    let word = |s: &str| {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    };
    (word(user) && word(group)).then_some((user, group))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn toks(line: &[&str]) -> Vec<String> {
        line.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn colon_separated_owner() {
        let resources = interpret(&toks(&["user:group", "/tmp/bar"]), "").unwrap();
        let attrs = resources
            .get(".file./tmp/bar")
            .and_then(|r| r.module("file.directory"))
            .expect("file.directory should exist");
        let pairs: Vec<(&str, &crate::state::Value)> =
            attrs.iter().map(|a| (a.key.as_str(), &a.value)).collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.first().unwrap().0, "name");
        assert_eq!(pairs.get(1).unwrap().0, "user");
        assert_eq!(pairs.get(2).unwrap().0, "group");
    }

    #[test]
    fn dot_separated_owner() {
        let resources = interpret(&toks(&["web.web", "/srv"]), "").unwrap();
        assert!(resources.get(".file./srv").is_some());
    }

    #[test]
    fn one_fragment_per_path() {
        let resources = interpret(&toks(&["root:root", "/a", "/b"]), "").unwrap();
        let ids: Vec<&str> = resources.ids().collect();
        assert_eq!(ids, [".file./a", ".file./b"]);
    }

    #[test]
    fn malformed_owner_fails() {
        for owner in ["root", "root:", ":wheel", "a:b:c", "a.b.c", "ro ot:x"] {
            assert_eq!(
                interpret(&toks(&[owner, "/tmp"]), "").unwrap_err(),
                CommandError::ChownUsage,
                "owner {owner:?} should be rejected"
            );
        }
    }

    #[test]
    fn no_tokens_fails_with_usage() {
        assert_eq!(interpret(&[], "").unwrap_err(), CommandError::ChownUsage);
    }

    #[test]
    fn owner_without_paths_fails() {
        assert_eq!(
            interpret(&toks(&["user:group"]), "").unwrap_err(),
            CommandError::ChownWithoutArguments
        );
    }
}
