//! Regex-based link extraction for markdown and HTML sources.
//!
//! This is intentionally not a markup parser: markdown yields inline
//! `[text](target)` links, HTML yields `href` attribute values.

use crate::models::{LinkKind, LinkOccurrence};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn markdown_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("valid markdown link regex"))
}

fn href_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).expect("valid href regex"))
}

/// Map a file path to the link syntax it is scanned for.
///
/// Only `.md` and `.html` (any case) are candidates; everything else is
/// enumerated but never scanned.
pub fn kind_for_path(path: &Path) -> Option<LinkKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "md" => Some(LinkKind::Markdown),
        "html" => Some(LinkKind::Html),
        _ => None,
    }
}

/// 1-based line number of a byte offset.
pub fn line_number(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Extract all link occurrences of the given kind, in appearance order.
pub fn extract_links(kind: LinkKind, content: &str) -> Vec<LinkOccurrence> {
    match kind {
        LinkKind::Markdown => markdown_links(content),
        LinkKind::Html => html_links(content),
    }
}

fn markdown_links(content: &str) -> Vec<LinkOccurrence> {
    markdown_link_re()
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let raw = caps.get(1)?.as_str();
            // (url "title") keeps only the url
            let first_token = raw.split_whitespace().next().unwrap_or("");
            Some(LinkOccurrence {
                line: line_number(content, whole.start()),
                kind: LinkKind::Markdown,
                target: first_token.to_string(),
            })
        })
        .collect()
}

fn html_links(content: &str) -> Vec<LinkOccurrence> {
    href_re()
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(LinkOccurrence {
                line: line_number(content, whole.start()),
                kind: LinkKind::Html,
                target: caps.get(1)?.as_str().to_string(),
            })
        })
        .collect()
}
