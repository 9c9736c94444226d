//! Tripwire CLI
//!
//! Reads a YAML rule document and a list of changed file paths, and prints
//! the commands whose labels matched, one per line. Wire it into CI after
//! the changed-file list is materialized:
//!
//! ```bash
//! git diff --name-only origin/main... | tripwire --config .tripwire.yml
//! ```
//!
//! Running the printed commands (and reporting their results) is left to
//! the surrounding pipeline.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tripwire::{ChangeSet, Ruleset};

#[derive(Parser, Debug)]
#[command(name = "tripwire")]
#[command(about = "Select CI commands to run from a changed-file list")]
struct Args {
    /// Path to the rule document
    #[arg(short, long, default_value = ".tripwire.yml")]
    config: PathBuf,

    /// Changed file paths; read newline-separated from stdin when omitted
    paths: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tripwire: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let document = fs::read_to_string(&args.config)
        .with_context(|| format!("reading rule document {}", args.config.display()))?;
    let ruleset = Ruleset::from_yaml(&document)
        .with_context(|| format!("loading rule document {}", args.config.display()))?;

    let changes = if args.paths.is_empty() {
        read_paths_from_stdin()?
    } else {
        ChangeSet::new(args.paths)
    };
    debug!(files = changes.len(), "evaluating change set");

    let triggered = ruleset.evaluate(&changes)?;
    for command in &triggered {
        println!("{command}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads one path per line, skipping blank lines.
fn read_paths_from_stdin() -> anyhow::Result<ChangeSet> {
    let stdin = io::stdin();
    let mut paths = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("reading changed paths from stdin")?;
        let path = line.trim();
        if !path.is_empty() {
            paths.push(path.to_string());
        }
    }
    Ok(ChangeSet::new(paths))
}
