//! Per-command interpreters and the verb dispatch table.
//!
//! Each supported command verb has one interpreter submodule. An
//! interpreter receives the tokens following the verb plus the current
//! namespace and produces a [`StateMap`] fragment, possibly empty when no
//! matching targets were found, which is not an error. Interpreters fail
//! fast: a grammar violation aborts the whole render pass and no partial
//! fragment is merged for the failing line.

mod chown;
mod curl;
mod iptables;
mod mkdir;
mod pkg;
mod raw;
mod systemctl;
mod useradd;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::CommandError;
use crate::state::StateMap;

/// Synthetic verb that routes lines beginning with `/` to the raw-command
/// interpreter.
pub const RAW_VERB: &str = "ld.so";

/// The fixed set of command interpreters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `yum install` / `apt-get install`: package resources.
    Pkg,
    /// `mkdir [-m <mode>] <dir>...`: directory resources.
    Mkdir,
    /// `chown <user>:<group> <path>...`: ownership attributes.
    Chown,
    /// `curl <src> [| <template>] > <file>`: managed-file resources.
    Curl,
    /// `useradd [flags] <name>`: user resources.
    Useradd,
    /// `iptables [flags] --comment <text>`: firewall rule resources.
    Iptables,
    /// `systemctl <action> <service>...`: service resources.
    Systemctl,
    /// Leading-slash lines: literal command resources.
    Raw,
}

/// Immutable verb → interpreter table, built once on first lookup.
static DISPATCH: LazyLock<HashMap<&'static str, Command>> = LazyLock::new(|| {
    HashMap::from([
        ("yum", Command::Pkg),
        ("apt-get", Command::Pkg),
        ("mkdir", Command::Mkdir),
        ("chown", Command::Chown),
        ("curl", Command::Curl),
        ("useradd", Command::Useradd),
        ("iptables", Command::Iptables),
        ("systemctl", Command::Systemctl),
        (RAW_VERB, Command::Raw),
    ])
});

/// Look up the interpreter for `verb`.
///
/// Lookup is exact-string and case-sensitive. `None` means the line is
/// ignored by the render pass, never an error.
#[must_use]
pub fn lookup(verb: &str) -> Option<Command> {
    DISPATCH.get(verb).copied()
}

impl Command {
    /// Interpret the tokens following the command verb into a state
    /// fragment for namespace `sls`.
    ///
    /// The raw-command interpreter is the exception to "following the
    /// verb": it receives every token on the line, since the leading
    /// slash token is part of the command it reproduces.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] when the tokens violate the command's
    /// grammar (see the per-command submodules for the conditions).
    pub fn interpret(self, tokens: &[String], sls: &str) -> Result<StateMap, CommandError> {
        match self {
            Self::Pkg => pkg::interpret(tokens, sls),
            Self::Mkdir => mkdir::interpret(tokens, sls),
            Self::Chown => chown::interpret(tokens, sls),
            Self::Curl => curl::interpret(tokens, sls),
            Self::Useradd => useradd::interpret(tokens, sls),
            Self::Iptables => iptables::interpret(tokens, sls),
            Self::Systemctl => systemctl::interpret(tokens, sls),
            Self::Raw => Ok(raw::interpret(tokens, sls)),
        }
    }
}

/// Cursor over a token slice with explicit bounds checks.
///
/// Running out of tokens while a flag still expects its value is an
/// explicit [`CommandError::TruncatedFlag`], never an implicit end of
/// iteration.
#[derive(Debug)]
struct Cursor<'a> {
    tokens: std::slice::Iter<'a, String>,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [String]) -> Self {
        Self {
            tokens: tokens.iter(),
        }
    }

    /// Consume the next token as the value of `flag`.
    fn value_for(&mut self, flag: &str) -> Result<&'a str, CommandError> {
        self.next().ok_or_else(|| CommandError::TruncatedFlag {
            flag: flag.to_string(),
        })
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.tokens.next().map(String::as_str)
    }
}

/// `true` for tokens that look like a bare package or service name: a
/// leading ASCII alphanumeric followed by at least one word character.
fn is_name(token: &str) -> bool {
    let mut chars = token.chars();
    let leading = chars.next().is_some_and(|c| c.is_ascii_alphanumeric());
    let mut rest = 0usize;
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return false;
        }
        rest += 1;
    }
    leading && rest > 0
}
