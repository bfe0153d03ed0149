//! Output rendering for validation results.
//!
//! Supports `human` (default) and `json` outputs. Human output puts the
//! success line on stdout and the failure banner plus issue list on stderr;
//! JSON goes to stdout in both cases.

use crate::config::OutputMode;
use crate::models::{Issue, Validation};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::{Path, PathBuf};

pub const OK_MESSAGE: &str = "✅ OK: internal links do not use '*.html' (except index.html).";
pub const FAIL_BANNER: &str =
    "❌ Found disallowed internal '*.html' links (pretty permalinks make them 404)";

fn use_colors(output: OutputMode) -> bool {
    output != OutputMode::Json && crate::utils::colors_enabled()
}

/// Path of an issue's file relative to the repository root.
pub fn relative_path(file: &Path, repo_root: &Path) -> PathBuf {
    pathdiff::diff_paths(file, repo_root).unwrap_or_else(|| file.to_path_buf())
}

/// One report line: `- <relative-path>:<line> (<kind>) <target>`.
pub fn issue_line(issue: &Issue, repo_root: &Path) -> String {
    format!(
        "- {}:{} ({}) {}",
        relative_path(&issue.file, repo_root).display(),
        issue.line,
        issue.kind,
        issue.target
    )
}

/// Print a validation result in the requested format.
pub fn print_validation(res: &Validation, repo_root: &Path, output: OutputMode) {
    match output {
        OutputMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&compose_json(res, repo_root)).unwrap()
        ),
        OutputMode::Human => {
            let color = use_colors(output);
            if res.ok {
                if color {
                    println!("{}", OK_MESSAGE.green());
                } else {
                    println!("{}", OK_MESSAGE);
                }
                return;
            }
            if color {
                eprintln!("{}\n", FAIL_BANNER.red().bold());
            } else {
                eprintln!("{}\n", FAIL_BANNER);
            }
            for issue in &res.issues {
                eprintln!("{}", issue_line(issue, repo_root));
            }
        }
    }
}

/// Compose the JSON report (pure) for testing/snapshot purposes.
pub fn compose_json(res: &Validation, repo_root: &Path) -> JsonVal {
    let items: Vec<_> = res
        .issues
        .iter()
        .map(|i| {
            let rel = relative_path(&i.file, repo_root);
            json!({
                "file": rel.to_string_lossy(),
                "line": i.line,
                "kind": i.kind,
                "target": i.target,
            })
        })
        .collect();
    json!({
        "ok": res.ok,
        "issues": items,
        "summary": res.summary,
    })
}
