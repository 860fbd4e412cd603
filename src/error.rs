//! Typed error hierarchy for the render pass.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! The library returns typed errors ([`RenderError`] wrapping a
//! [`ScriptError`] or [`CommandError`]) while command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! RenderError
//! ├── Script(ScriptError)    a line could not be lexed
//! └── Command(CommandError)  an interpreter rejected its tokens
//! ```
//!
//! All errors are fatal to the render pass: the caller receives either a
//! complete result or a single error describing the first failing line.
//! Unrecognized command verbs are not errors; those lines are skipped.

use thiserror::Error;

/// Top-level error type for a render pass.
///
/// Carries the 1-based line number of the failing line so the caller can
/// report a precise diagnostic.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The tokenizer could not lex a line.
    #[error("line {line}: {source}")]
    Script {
        /// 1-based line number of the failing line.
        line: usize,
        /// Underlying lexing failure.
        source: ScriptError,
    },

    /// A command interpreter rejected the tokens following its verb.
    #[error("line {line}: {verb}: {source}")]
    Command {
        /// 1-based line number of the failing line.
        line: usize,
        /// The command verb that was being interpreted.
        verb: String,
        /// Underlying grammar violation.
        source: CommandError,
    },
}

/// Errors raised while lexing a single script line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// A single or double quote was opened but never closed.
    #[error("unterminated quote")]
    UnterminatedQuote,

    /// The line ends in a lone backslash with nothing left to escape.
    #[error("dangling escape at end of line")]
    DanglingEscape,
}

/// Errors raised by the command interpreters.
///
/// Each variant corresponds to one per-command grammar condition; the
/// message texts match the original renderer's diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `mkdir` had no directory operands left after flag consumption.
    #[error("mkdir without arguments")]
    MkdirWithoutArguments,

    /// `chown`'s first token was not a `user:group` (or `user.group`) pair.
    #[error("usage: chown $user:$group <files>")]
    ChownUsage,

    /// `chown` had an owner pair but no paths to apply it to.
    #[error("chown without arguments")]
    ChownWithoutArguments,

    /// `curl`'s token stream ended before a `>` redirect was seen.
    #[error("requires a strict curl command ending in \"> <filename>\"")]
    CurlWithoutTarget,

    /// `useradd` had flags but no bare token naming the user.
    #[error("requires a strict useradd command")]
    UseraddWithoutName,

    /// `iptables` ended without a `--comment` naming the rule.
    #[error("requires a strict iptables command")]
    IptablesWithoutComment,

    /// `systemctl`'s first token was not a recognized action.
    #[error("requires a strict systemctl command")]
    SystemctlUnknownAction,

    /// The token stream ran out while a flag still expected a value.
    #[error("flag '{flag}' expects a value")]
    TruncatedFlag {
        /// The flag that was left without its value.
        flag: String,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // ScriptError
    // -----------------------------------------------------------------------

    #[test]
    fn script_error_unterminated_quote_display() {
        assert_eq!(
            ScriptError::UnterminatedQuote.to_string(),
            "unterminated quote"
        );
    }

    #[test]
    fn script_error_dangling_escape_display() {
        assert_eq!(
            ScriptError::DanglingEscape.to_string(),
            "dangling escape at end of line"
        );
    }

    // -----------------------------------------------------------------------
    // CommandError
    // -----------------------------------------------------------------------

    #[test]
    fn command_error_mkdir_display() {
        assert_eq!(
            CommandError::MkdirWithoutArguments.to_string(),
            "mkdir without arguments"
        );
    }

    #[test]
    fn command_error_chown_usage_display() {
        assert_eq!(
            CommandError::ChownUsage.to_string(),
            "usage: chown $user:$group <files>"
        );
    }

    #[test]
    fn command_error_truncated_flag_display() {
        let e = CommandError::TruncatedFlag {
            flag: "--dport".to_string(),
        };
        assert_eq!(e.to_string(), "flag '--dport' expects a value");
    }

    // -----------------------------------------------------------------------
    // RenderError context
    // -----------------------------------------------------------------------

    #[test]
    fn render_error_script_carries_line_number() {
        let e = RenderError::Script {
            line: 7,
            source: ScriptError::UnterminatedQuote,
        };
        assert_eq!(e.to_string(), "line 7: unterminated quote");
    }

    #[test]
    fn render_error_command_carries_verb() {
        let e = RenderError::Command {
            line: 3,
            verb: "mkdir".to_string(),
            source: CommandError::MkdirWithoutArguments,
        };
        assert_eq!(e.to_string(), "line 3: mkdir: mkdir without arguments");
    }

    #[test]
    fn render_error_exposes_source() {
        use std::error::Error as StdError;
        let e = RenderError::Command {
            line: 1,
            verb: "curl".to_string(),
            source: CommandError::CurlWithoutTarget,
        };
        assert!(e.source().is_some());
    }

    // -----------------------------------------------------------------------
    // Send + Sync bounds
    // -----------------------------------------------------------------------

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<RenderError>();
        assert_send_sync::<ScriptError>();
        assert_send_sync::<CommandError>();
    }

    #[test]
    fn render_error_converts_to_anyhow() {
        let e = RenderError::Script {
            line: 1,
            source: ScriptError::DanglingEscape,
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
