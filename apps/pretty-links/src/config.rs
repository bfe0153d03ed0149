//! Configuration discovery and effective settings resolution.
//!
//! pretty-links reads `pretty-links.toml|yaml|yml` from the repository root
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `docs`: `docs`
//! - `output`: `human`
//! - `exclude`: empty
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["pretty-links.toml", "pretty-links.yaml", "pretty-links.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `pretty-links.toml|yaml`.
pub struct LinkConfig {
    pub docs: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Report rendering mode.
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            _ => Err(Error::InvalidOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the check after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub scan_root: PathBuf,
    pub output: OutputMode,
    pub exclude: Vec<String>,
    pub config_found: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `pretty-links.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) if !p.as_os_str().is_empty() => cur = p,
            _ => return start.to_path_buf(),
        }
    }
}

/// Load `LinkConfig` from the first config file present under `root`.
///
/// Absence is not an error; a file that exists but does not parse is.
pub fn load_config(root: &Path) -> Result<Option<LinkConfig>> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|e| Error::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<LinkConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<LinkConfig>(&s).map_err(|e| e.to_string())
        };
        return parsed
            .map(Some)
            .map_err(|message| Error::Config { path, message });
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_docs: Option<&str>,
    cli_output: Option<&str>,
    cli_exclude: &[String],
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    // Anchor relative starts so discovery can climb past the cwd
    let start = match std::env::current_dir() {
        Ok(cwd) if start.is_relative() => cwd.join(start),
        _ => start,
    };
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let docs = cli_docs
        .map(|s| s.to_string())
        .or(cfg.docs)
        .unwrap_or_else(|| "docs".to_string());
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let exclude = if cli_exclude.is_empty() {
        cfg.exclude.unwrap_or_default()
    } else {
        cli_exclude.to_vec()
    };

    Ok(Effective {
        scan_root: repo_root.join(docs),
        repo_root,
        output: OutputMode::parse(&output)?,
        exclude,
        config_found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        let eff = resolve_effective(root.to_str(), None, None, &[]).unwrap();
        assert_eq!(eff.repo_root, root);
        assert_eq!(eff.scan_root, root.join("docs"));
        assert_eq!(eff.output, OutputMode::Human);
        assert!(eff.exclude.is_empty());
        assert!(!eff.config_found);
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("pretty-links.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
docs = "site/src"
output = "json"
exclude = ["vendor/**"]
    "#
        )
        .unwrap();
        let nested = root.join("site/src/chapters");
        fs::create_dir_all(&nested).unwrap();

        // Discovery walks up from a nested directory
        let eff = resolve_effective(nested.to_str(), None, None, &[]).unwrap();
        assert_eq!(eff.repo_root, root);
        assert_eq!(eff.scan_root, root.join("site/src"));
        assert_eq!(eff.output, OutputMode::Json);
        assert_eq!(eff.exclude, vec!["vendor/**".to_string()]);
        assert!(eff.config_found);
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("pretty-links.yml"),
            "docs: pages\nexclude:\n  - drafts/*.md\n",
        )
        .unwrap();
        let eff = resolve_effective(root.to_str(), None, None, &[]).unwrap();
        assert_eq!(eff.scan_root, root.join("pages"));
        assert_eq!(eff.output, OutputMode::Human);
        assert_eq!(eff.exclude, vec!["drafts/*.md".to_string()]);
    }

    #[test]
    fn test_cli_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("pretty-links.toml"),
            "docs = \"pages\"\noutput = \"json\"\nexclude = [\"a/*\"]\n",
        )
        .unwrap();
        let eff = resolve_effective(
            root.to_str(),
            Some("book"),
            Some("human"),
            &["b/*".to_string()],
        )
        .unwrap();
        assert_eq!(eff.scan_root, root.join("book"));
        assert_eq!(eff.output, OutputMode::Human);
        assert_eq!(eff.exclude, vec!["b/*".to_string()]);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("pretty-links.toml"), "docs = [not toml").unwrap();
        let err = resolve_effective(root.to_str(), None, None, &[]).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unreadable_config_is_a_config_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("pretty-links.toml")).unwrap();
        let err = resolve_effective(root.to_str(), None, None, &[]).unwrap_err();
        assert!(matches!(err, Error::Config { ref path, .. } if path == &root.join("pretty-links.toml")));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_output_mode_rejected() {
        let dir = tempdir().unwrap();
        let err = resolve_effective(dir.path().to_str(), None, Some("xml"), &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidOutput(ref s) if s == "xml"));
        assert_eq!(OutputMode::parse(" JSON ").unwrap(), OutputMode::Json);
    }
}
