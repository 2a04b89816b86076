//! safe-clean: remove untracked files from a Git working tree
//!
//! Lists untracked files through git2 and deletes them, optionally restricted
//! to the paths given on the command line, or only reports them with -n.

use std::path::PathBuf;
use std::process::ExitCode;

use safe_clean::clean::{CleanOperation, CleanOptions};
use safe_clean::cli::{CliArgs, Commands};
use safe_clean::config::Config;
use safe_clean::error::CleanError;
use safe_clean::git_status::GitStatus;
use safe_clean::init::run_init;
use safe_clean::logging;
use safe_clean::path_checker::PathChecker;
use safe_clean::remover::WorkTreeRemover;

fn main() -> ExitCode {
    let args = CliArgs::parse_args();

    let loaded = Config::try_load();
    logging::init(
        loaded
            .as_ref()
            .ok()
            .and_then(|config| config.log_level.as_deref()),
    );
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("{:#}; using defaults", e);
        Config::default()
    });

    if let Some(Commands::Init) = args.command {
        return match run_init() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("safe-clean: {:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("safe-clean: {}", e.user_message());
            e.exit_code().into()
        }
    }
}

/// Main execution logic
fn run(args: &CliArgs, config: &Config) -> Result<(), CleanError> {
    if config.require_force && !args.force && !args.dry_run {
        return Err(CleanError::ForceRequired);
    }

    let cwd = working_directory(args)?;
    let status = GitStatus::discover(&cwd)?;
    let workdir = status.workdir().to_path_buf();

    let options = CleanOptions::new()
        .with_paths(PathChecker::restriction(&workdir, &cwd, &args.paths)?)
        .with_dry_run(args.dry_run);
    let remover = WorkTreeRemover::new(&workdir);

    let files = CleanOperation::new(&status, &remover, options).execute()?;

    if !args.quiet {
        let prefix = if args.dry_run {
            "Would remove"
        } else {
            "Removing"
        };
        for file in &files {
            println!("{} {}", prefix, file);
        }
    }

    Ok(())
}

/// Current directory, or `-C DIR` resolved against it
fn working_directory(args: &CliArgs) -> Result<PathBuf, CleanError> {
    let cwd = std::env::current_dir()?;
    Ok(match &args.directory {
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}
