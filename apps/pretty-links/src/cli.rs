//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pretty-links",
    version,
    about = "Check internal links for *.html targets",
    long_about = "pretty-links scans markdown and HTML sources of a static site and reports internal links that end in '.html' (except index.html). Sites served with pretty permalinks drop the suffix, so such links 404.\n\nConfiguration precedence: CLI > pretty-links.toml > defaults.",
    after_help = "Examples:\n  pretty-links\n  pretty-links check --docs site/src --output json\n  pretty-links check --exclude 'generated/**/*.md'",
    args_conflicts_with_subcommands = true
)]
/// Top-level CLI options. Without a subcommand the check runs with defaults.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
    #[command(flatten)]
    pub check: CheckArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current pretty-links version.")]
    Version,
    /// Check links under the docs directory
    #[command(
        about = "Check internal links",
        long_about = "Scan .md and .html files under the docs directory and report internal links to '*.html'. Exits 1 when any are found.",
        after_help = "Examples:\n  pretty-links check\n  pretty-links check --repo-root ../site --docs content"
    )]
    Check(CheckArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    #[arg(long, help = "Repository root (default: detected from current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Directory to scan, relative to the repository root (default: docs)")]
    pub docs: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Glob of files to skip, relative to the docs directory (repeatable)")]
    pub exclude: Vec<String>,
}
