//! Shared data models for extracted links, issues, and run results.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Which syntax a link target was extracted from.
pub enum LinkKind {
    /// `[text](target)` in a `.md` file.
    Markdown,
    /// `href="target"` in a `.html` file.
    Html,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Markdown => "markdown",
            LinkKind::Html => "html",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One link target found in a file, before classification.
pub struct LinkOccurrence {
    /// 1-based line of the match start.
    pub line: usize,
    pub kind: LinkKind,
    /// Target as written (markdown: first token of the parenthesized part).
    pub target: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A link occurrence that violates the pretty-URL convention.
pub struct Issue {
    pub file: PathBuf,
    pub line: usize,
    pub kind: LinkKind,
    pub target: String,
}

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
/// Counters collected during a run.
pub struct Summary {
    pub files_seen: usize,
    pub files_scanned: usize,
    pub links_checked: usize,
    pub issues: usize,
}

#[derive(Serialize, Debug)]
/// Result of one validation run.
pub struct Validation {
    pub ok: bool,
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
