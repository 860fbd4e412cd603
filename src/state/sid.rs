//! Deterministic state identifiers.

/// Generate the predictable identifier for a resource.
///
/// Shell scripts touch the same target with several commands: a file is
/// fetched by `curl`, then chown'd, then chmod'd. Every such command
/// derives the identical identifier for the target, which is the join key
/// [`merge`](super::merge) uses to fold those fragments into a single
/// resource.
///
/// The kind is normalized through a fixed alias table first (`mkdir` →
/// `file`, `yum`/`apt-get` → `pkg`; everything else passes through), then
/// joined as `<sls>.<kind>.<name>`. The namespace `sls` may be empty.
///
/// # Examples
///
/// ```
/// use shelly_cli::state::sid;
///
/// assert_eq!(sid::generate("", "pkg", "vim"), ".pkg.vim");
/// assert_eq!(sid::generate("web", "svc", "nginx"), "web.svc.nginx");
/// ```
#[must_use]
pub fn generate(sls: &str, kind: &str, name: &str) -> String {
    let kind = match kind {
        "mkdir" => "file",
        "yum" | "apt-get" => "pkg",
        other => other,
    };
    format!("{sls}.{kind}.{name}")
}
