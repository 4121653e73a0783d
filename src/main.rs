//! git-status-json - grouped git status output
//!
//! A command-line tool that prints the files reported by `git status`
//! grouped by their state, as JSON or plaintext.

use clap::Parser;
use git_status_json::cli::args::{generate_completions, Cli};
use git_status_json::commands::run_status;
use git_status_json::config::ConfigBuilder;
use git_status_json::error::{AppError, GitError};
use git_status_json::git::ProcessRunner;

fn main() {
    // Parse CLI arguments; usage errors exit with 1, help and version with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    if let Err(e) = run(cli) {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Default filter is `warn`, `--verbose` lowers it to `debug`; `RUST_LOG` wins over both
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .parse_env(env_logger::Env::default());
    builder.init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_format(cli.format)
        .with_column(cli.column.map(Into::into))
        .with_cwd(cli.cwd)
        .with_git(cli.git)
        .build()?;

    log::debug!("Resolved settings: {:?}", settings);

    let runner = ProcessRunner::new(&settings.git);
    log::debug!("Using git executable {}", runner.program().display());
    run_status(&runner, &settings)
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Git(e @ GitError::Spawn { .. }) if e.is_not_found() => {
            eprintln!();
            eprintln!("Hint: Make sure git is installed and on your PATH,");
            eprintln!("      or point --git at the executable.");
        }
        AppError::Git(e) if e.is_not_a_repository() => {
            eprintln!();
            eprintln!("Hint: Run inside a git repository or pass --cwd.");
        }
        _ => {}
    }
}
