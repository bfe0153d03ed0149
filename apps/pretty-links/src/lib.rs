//! pretty-links core library.
//!
//! Scans a static site's markdown and HTML sources for internal links that
//! point at `*.html` files other than `index.html`. Sites deployed with
//! pretty permalinks serve `/chapters/foo/` rather than `/chapters/foo.html`,
//! so such links 404.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `walk`: Directory traversal with `node_modules`/dot-dir pruning.
//! - `extract`: Regex-based link extraction for markdown and HTML.
//! - `rules`: Target normalization and the disallowed-shape check.
//! - `validate`: The validation pass producing issues and a summary.
//! - `models`: Data models for links, issues, and results.
//! - `output`: Human/JSON printers.
//! - `error`: Error taxonomy.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;
pub mod validate;
pub mod walk;

pub use error::{Error, Result};
pub use models::{Issue, LinkKind, Validation};
pub use validate::{validate, ValidateOptions};
