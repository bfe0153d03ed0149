//! Classification rules for link targets.
//!
//! A target is disallowed when it is internal, navigational, and its path
//! (fragment and query removed) ends in `.html` without being a literal
//! `index.html`. Deployed pretty URLs drop the suffix, so such links 404.

const EXTERNAL_PREFIXES: [&str; 5] = ["http://", "https://", "mailto:", "tel:", "//"];

/// Trim whitespace and strip one pair of enclosing angle brackets.
pub fn normalize_target(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}

/// True for absolute URLs and non-navigational schemes.
pub fn is_external(target: &str) -> bool {
    let lower = target.trim().to_ascii_lowercase();
    EXTERNAL_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Cut the fragment, then the query, from a target.
///
/// The `#` split happens first, so a `?` after the fragment marker never
/// acts as a query separator.
pub fn strip_query_and_fragment(target: &str) -> &str {
    let before_fragment = target.split('#').next().unwrap_or(target);
    before_fragment.split('?').next().unwrap_or(before_fragment)
}

/// Whether a raw target breaks the pretty-URL convention.
pub fn is_disallowed_html_link(raw: &str) -> bool {
    let normalized = normalize_target(raw);
    if normalized.is_empty() || normalized.starts_with('#') || is_external(normalized) {
        return false;
    }

    let path = strip_query_and_fragment(normalized).to_ascii_lowercase();
    // index.html exists as a concrete file on the deployed site
    if path == "index.html" || path.ends_with("/index.html") {
        return false;
    }
    path.ends_with(".html")
}
