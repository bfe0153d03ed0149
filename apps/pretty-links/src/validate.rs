//! Link validation over a scan root.
//!
//! Walks the tree, extracts links from every candidate file, and keeps the
//! disallowed ones as issues in scan order. Issues never stop the scan; only
//! a missing root or an unreadable file/directory aborts it.

use crate::error::{Error, Result};
use crate::extract::{extract_links, kind_for_path};
use crate::models::{Issue, LinkKind, Summary, Validation};
use crate::rules::is_disallowed_html_link;
use crate::walk::collect_files;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::Path;

const MATCH_OPTS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Default, Clone)]
/// Knobs for a validation run. The default checks every candidate file.
pub struct ValidateOptions {
    /// Globs matched against paths relative to the scan root (`/`-separated).
    pub exclude: Vec<Pattern>,
}

impl ValidateOptions {
    /// Compile exclusion globs, failing on the first invalid one.
    pub fn with_excludes(patterns: &[String]) -> Result<Self> {
        let exclude = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|source| Error::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { exclude })
    }

    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        self.exclude.iter().any(|p| p.matches_with(&rel, MATCH_OPTS))
    }
}

/// Find disallowed links in one file's content.
pub fn check_content(file: &Path, kind: LinkKind, content: &str) -> (Vec<Issue>, usize) {
    let links = extract_links(kind, content);
    let checked = links.len();
    let issues = links
        .into_iter()
        .filter(|l| is_disallowed_html_link(&l.target))
        .map(|l| Issue {
            file: file.to_path_buf(),
            line: l.line,
            kind: l.kind,
            target: l.target,
        })
        .collect();
    (issues, checked)
}

/// Validate every `.md`/`.html` file under `scan_root`.
///
/// Returns [`Error::MissingRoot`] before touching the tree when the root
/// does not exist.
pub fn validate(scan_root: &Path, opts: &ValidateOptions) -> Result<Validation> {
    if !scan_root.exists() {
        return Err(Error::MissingRoot {
            path: scan_root.to_path_buf(),
        });
    }

    let files = collect_files(scan_root)?;
    let mut summary = Summary {
        files_seen: files.len(),
        ..Summary::default()
    };
    let mut issues: Vec<Issue> = Vec::new();

    for path in &files {
        let Some(kind) = kind_for_path(path) else {
            continue;
        };
        if opts.is_excluded(scan_root, path) {
            tracing::debug!(file = %path.display(), "excluded");
            continue;
        }
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let (found, checked) = check_content(path, kind, &content);
        tracing::trace!(file = %path.display(), %kind, links = checked, issues = found.len(), "scanned");
        summary.files_scanned += 1;
        summary.links_checked += checked;
        issues.extend(found);
    }

    summary.issues = issues.len();
    tracing::info!(
        files = summary.files_scanned,
        links = summary.links_checked,
        issues = summary.issues,
        "validation finished"
    );
    Ok(Validation {
        ok: issues.is_empty(),
        issues,
        summary,
    })
}
