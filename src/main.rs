//! pwd-blocks CLI
#![deny(unsafe_code)]

use std::io::BufRead;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pwd_blocks::{Policy, ValidationError};
use secrecy::SecretString;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                 Log filter (e.g., debug, pwd_blocks=trace)
    PWD_BLOCKS_MIN_LENGTH    Minimum password length (default: 8)
    PWD_BLOCKS_MAX_LENGTH    Maximum password length (default: 12)
    PWD_BLOCKS_MAX_BLOCK     Longest block considered decent (default: 2)
";

/// Command-line interface definition for pwd-blocks.
#[derive(Parser)]
#[command(name = "pwd-blocks")]
#[command(about = "Find the largest block of identical adjacent characters in a password", long_about = None)]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
struct Cli {
    /// Password to check (read from stdin when omitted)
    #[arg(allow_hyphen_values = true)]
    password: Option<String>,

    /// Minimum length (overrides PWD_BLOCKS_MIN_LENGTH)
    #[arg(long, value_name = "N")]
    min_length: Option<usize>,

    /// Maximum length (overrides PWD_BLOCKS_MAX_LENGTH)
    #[arg(long, value_name = "N")]
    max_length: Option<usize>,

    /// Longest block considered decent (overrides PWD_BLOCKS_MAX_BLOCK)
    #[arg(long, value_name = "N")]
    max_block: Option<usize>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long)]
    quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output as JSON (for scripting)
    #[arg(long)]
    json: bool,
}

fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    EnvFilter::new(level)
}

fn init_tracing(quiet: bool, verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_policy(cli: &Cli) -> anyhow::Result<Policy> {
    let base = Policy::from_env().context("failed to load policy from environment")?;
    Policy::new(
        cli.min_length.unwrap_or(base.min_length),
        cli.max_length.unwrap_or(base.max_length),
        cli.max_block.unwrap_or(base.max_block),
    )
    .context("invalid policy")
}

/// Reads one line from stdin, dropping only the line terminator.
fn read_candidate_line() -> anyhow::Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn report_failure(err: ValidationError, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "error": err.to_string() }));
    } else {
        eprintln!("Error: {err}");
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        from_stdin = cli.password.is_none(),
        "CLI initialized"
    );

    let policy = load_policy(&cli)?;

    let candidate = match cli.password {
        Some(password) => password,
        None => read_candidate_line()?,
    };
    let candidate = SecretString::new(candidate.into());

    match policy.analyze(&candidate) {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            debug!(%err, "candidate rejected");
            report_failure(err, cli.json);
            Ok(ExitCode::FAILURE)
        }
    }
}
