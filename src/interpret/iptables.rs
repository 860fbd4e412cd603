//! `iptables`: firewall rule resources.
//!
//! ```text
//! iptables -A INPUT --proto tcp --dport 22 --comment "Allow SSH"
//! iptables -P INPUT DROP --comment "default drop"
//! ```
//!
//! The `--comment` text names the rule: it fixes the fragment's
//! identifier and implies `save: true`.

use super::Cursor;
use crate::error::CommandError;
use crate::state::{Attr, StateMap, sid};

/// Interpret an iptables token stream.
///
/// Module selection happens once, on the first `-P`/`-I`/`-A` flag
/// encountered: `-P` selects `iptables.set_policy`, `-I` selects
/// `iptables.insert`, and `-A` (or no such flag at all) selects
/// `iptables.append`. Later flags still contribute attributes but never
/// reselect the module. Tokens outside the recognized flag set
/// contribute nothing.
///
/// # Errors
///
/// [`CommandError::IptablesWithoutComment`] when the stream ends without
/// a `--comment`, [`CommandError::TruncatedFlag`] when a flag has fewer
/// values than it consumes.
pub(super) fn interpret(tokens: &[String], sls: &str) -> Result<StateMap, CommandError> {
    let mut attrs = Vec::new();
    let mut module: Option<&'static str> = None;
    let mut target = None;
    let mut cur = Cursor::new(tokens);

    while let Some(token) = cur.next() {
        match token {
            "-P" => {
                attrs.push(Attr::str("chain", cur.value_for("-P")?));
                attrs.push(Attr::str("policy", cur.value_for("-P")?));
                module.get_or_insert("iptables.set_policy");
            }
            "-I" => {
                attrs.push(Attr::str("position", cur.value_for("-I")?));
                module.get_or_insert("iptables.insert");
            }
            "-A" => {
                attrs.push(Attr::str("chain", cur.value_for("-A")?));
                module.get_or_insert("iptables.append");
            }
            "-s" => attrs.push(Attr::str("source", cur.value_for("-s")?)),
            "--connstate" => attrs.push(Attr::str("connstate", cur.value_for("--connstate")?)),
            "--dport" => attrs.push(Attr::str("dport", cur.value_for("--dport")?)),
            "--proto" => attrs.push(Attr::str("proto", cur.value_for("--proto")?)),
            "--match" => attrs.push(Attr::list(
                "match",
                cur.value_for("--match")?
                    .split(',')
                    .map(ToString::to_string)
                    .collect(),
            )),
            "--comment" => {
                attrs.push(Attr::flag("save", true));
                target = Some(sid::generate(sls, "iptables", cur.value_for("--comment")?));
            }
            _ => {}
        }
    }

    let Some(id) = target else {
        return Err(CommandError::IptablesWithoutComment);
    };
    let mut resources = StateMap::new();
    resources.insert_module(id, module.unwrap_or("iptables.append"), attrs);
    Ok(resources)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::state::Value;

    fn toks(line: &[&str]) -> Vec<String> {
        line.iter().map(ToString::to_string).collect()
    }

    fn rule(resources: &StateMap, id: &str, module: &str) -> Vec<(String, Value)> {
        resources
            .get(id)
            .and_then(|r| r.module(module))
            .unwrap_or_else(|| panic!("{module} should exist under {id}"))
            .iter()
            .map(|a| (a.key.clone(), a.value.clone()))
            .collect()
    }

    #[test]
    fn policy_rule() {
        let resources = interpret(
            &toks(&["-P", "INPUT", "DROP", "--comment", "default drop"]),
            "",
        )
        .unwrap();
        let attrs = rule(&resources, ".iptables.default drop", "iptables.set_policy");
        assert_eq!(
            attrs,
            [
                ("chain".to_string(), Value::Str("INPUT".to_string())),
                ("policy".to_string(), Value::Str("DROP".to_string())),
                ("save".to_string(), Value::Bool(true)),
            ]
        );
    }

    #[test]
    fn append_rule_with_filters() {
        let resources = interpret(
            &toks(&[
                "-A", "INPUT", "--proto", "tcp", "--dport", "22", "--comment", "Allow SSH",
            ]),
            "",
        )
        .unwrap();
        let attrs = rule(&resources, ".iptables.Allow SSH", "iptables.append");
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["chain", "proto", "dport", "save"]);
    }

    #[test]
    fn insert_rule_selects_insert_module() {
        let resources = interpret(&toks(&["-I", "2", "--comment", "early"]), "").unwrap();
        assert!(
            resources
                .get(".iptables.early")
                .is_some_and(|r| r.has_module("iptables.insert"))
        );
    }

    #[test]
    fn no_chain_flag_defaults_to_append() {
        let resources = interpret(&toks(&["-s", "10.0.0.0/8", "--comment", "lan"]), "").unwrap();
        assert!(
            resources
                .get(".iptables.lan")
                .is_some_and(|r| r.has_module("iptables.append"))
        );
    }

    #[test]
    fn module_selection_happens_once() {
        // -A first wins; a later -P still contributes chain/policy attrs.
        let resources = interpret(
            &toks(&["-A", "INPUT", "-P", "INPUT", "DROP", "--comment", "mixed"]),
            "",
        )
        .unwrap();
        let resource = resources.get(".iptables.mixed").expect("rule should exist");
        assert!(resource.has_module("iptables.append"));
        assert!(!resource.has_module("iptables.set_policy"));
    }

    #[test]
    fn match_flag_is_comma_split_into_a_list() {
        let resources = interpret(
            &toks(&["--match", "state,comment", "--comment", "m"]),
            "",
        )
        .unwrap();
        let attrs = rule(&resources, ".iptables.m", "iptables.append");
        assert_eq!(
            attrs.first().unwrap().1,
            Value::List(vec!["state".to_string(), "comment".to_string()])
        );
    }

    #[test]
    fn unrecognized_tokens_contribute_nothing() {
        let resources = interpret(
            &toks(&["-A", "INPUT", "-j", "ACCEPT", "--comment", "jump"]),
            "",
        )
        .unwrap();
        let attrs = rule(&resources, ".iptables.jump", "iptables.append");
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k.as_str()).collect();
        // Neither -j nor ACCEPT shows up.
        assert_eq!(keys, ["chain", "save"]);
    }

    #[test]
    fn missing_comment_fails() {
        assert_eq!(
            interpret(&toks(&["-A", "INPUT"]), "").unwrap_err(),
            CommandError::IptablesWithoutComment
        );
    }

    #[test]
    fn truncated_policy_flag_fails() {
        assert_eq!(
            interpret(&toks(&["-P", "INPUT"]), "").unwrap_err(),
            CommandError::TruncatedFlag {
                flag: "-P".to_string()
            }
        );
    }

    #[test]
    fn comment_without_text_fails() {
        assert_eq!(
            interpret(&toks(&["-A", "INPUT", "--comment"]), "").unwrap_err(),
            CommandError::TruncatedFlag {
                flag: "--comment".to_string()
            }
        );
    }
}
