//! pretty-links CLI binary entry point.
//! Resolves configuration, runs the validation pass, and prints results.

use clap::Parser;
use pretty_links::cli::{CheckArgs, Cli, Commands};
use pretty_links::config::{self, Effective};
use pretty_links::output;
use pretty_links::utils::{error_prefix, note_prefix};
use pretty_links::{validate, Error, Result, ValidateOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let args = match cli.cmd {
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Some(Commands::Check(args)) => args,
        None => cli.check,
    };

    match run_check(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            if matches!(e, Error::MissingRoot { .. }) {
                eprintln!(
                    "{} pass --docs or set `docs` in pretty-links.toml",
                    note_prefix()
                );
            }
            std::process::exit(e.exit_code());
        }
    }
}

/// Run the check and print the report. Returns whether no issues were found.
fn run_check(args: &CheckArgs) -> Result<bool> {
    let eff: Effective = config::resolve_effective(
        args.repo_root.as_deref(),
        args.docs.as_deref(),
        args.output.as_deref(),
        &args.exclude,
    )?;
    tracing::debug!(
        repo_root = %eff.repo_root.display(),
        scan_root = %eff.scan_root.display(),
        config_found = eff.config_found,
        "resolved configuration"
    );
    let opts = ValidateOptions::with_excludes(&eff.exclude)?;
    let res = validate(&eff.scan_root, &opts)?;
    output::print_validation(&res, &eff.repo_root, eff.output);
    Ok(res.ok)
}
