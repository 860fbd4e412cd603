#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Integration tests for the `check` and `render` commands.
//!
//! These tests drive the command layer against real script files on disk,
//! exercising file reading, error propagation, and the rendered document.

use std::io::Write as _;

use shelly_cli::cli::{CheckOpts, Format, GlobalOpts, RenderOpts};
use shelly_cli::commands;

fn script_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp script");
    file.write_all(contents.as_bytes()).expect("write script");
    file
}

fn no_namespace() -> GlobalOpts {
    GlobalOpts { sls: None }
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_accepts_a_valid_script() {
    let file = script_file("#!shelly\nyum install vim\n");
    let opts = CheckOpts {
        file: file.path().to_path_buf(),
    };
    assert!(commands::check::run(&no_namespace(), &opts).is_ok());
}

#[test]
fn check_reports_lex_errors_with_line_numbers() {
    let file = script_file("yum install vim\necho 'unterminated\n");
    let opts = CheckOpts {
        file: file.path().to_path_buf(),
    };
    let err = commands::check::run(&no_namespace(), &opts).unwrap_err();
    assert!(
        err.to_string().contains("line 2"),
        "error should name the failing line: {err}"
    );
}

#[test]
fn check_reports_command_errors_with_the_verb() {
    let file = script_file("mkdir\n");
    let opts = CheckOpts {
        file: file.path().to_path_buf(),
    };
    let err = commands::check::run(&no_namespace(), &opts).unwrap_err();
    assert!(
        err.to_string().contains("mkdir"),
        "error should name the failing verb: {err}"
    );
}

#[test]
fn check_missing_file_fails_with_the_path() {
    let opts = CheckOpts {
        file: "/nonexistent/setup.sls".into(),
    };
    let err = commands::check::run(&no_namespace(), &opts).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/setup.sls"));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_writes_yaml_by_default() {
    let file = script_file("yum install vim\n");
    let opts = RenderOpts {
        file: file.path().to_path_buf(),
        format: Format::Yaml,
    };
    assert!(commands::render::run(&no_namespace(), &opts).is_ok());
}

#[test]
fn render_namespace_flows_into_identifiers() {
    let script = commands::read_script(script_file("yum install vim\n").path()).unwrap();
    let states = shelly_cli::render(&script, "base").unwrap();
    assert!(states.get("base.pkg.vim").is_some());
}

#[test]
fn rendered_yaml_document_lists_module_calls() {
    let states = shelly_cli::render("systemctl start sshd\n", "").unwrap();
    let doc = commands::render::serialize(&states, Format::Yaml).unwrap();
    assert!(doc.contains("service.running"), "unexpected document:\n{doc}");
    assert!(doc.contains("name: sshd"), "unexpected document:\n{doc}");
}

#[test]
fn rendered_json_document_is_parseable() {
    let states = shelly_cli::render("mkdir /opt/tools\n", "").unwrap();
    let doc = commands::render::serialize(&states, Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert!(value.get(".file./opt/tools").is_some());
}
