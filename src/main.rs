use anyhow::Context;
use clap::Parser;
use imago::{ConfigSnapshot, Harness, JpegTarget, Outcome, PROPAGATION_EXIT_CODE};
use std::fs;
use std::path::PathBuf;

mod cli;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Run { files } => run(&files),
        Commands::Check { json } => check(json),
    }
}

/// Replay inputs through the same gated harness the fuzz targets use.
///
/// Exit codes: 3 is reserved for the propagation check; a finding leaves as
/// a panic; driver-side errors (unreadable file) exit 1 via `anyhow`.
fn run(files: &[PathBuf]) -> anyhow::Result<()> {
    // The gate comes first: no file is read before the check passes.
    let harness = Harness::from_env_or_exit(JpegTarget);

    for path in files {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        match harness.run_one(&bytes) {
            Outcome::Success => println!("{}: ok", path.display()),
            Outcome::Rejected(kind) => println!("{}: rejected ({kind})", path.display()),
            // Resurface the finding exactly as the fuzz entry would.
            Outcome::Failed(failure) => panic!("{failure}"),
        }
    }
    Ok(())
}

fn check(json: bool) -> anyhow::Result<()> {
    let snapshot = ConfigSnapshot::capture();
    if let Err(error) = snapshot.verify_required() {
        eprintln!("ERROR: {error}");
        std::process::exit(PROPAGATION_EXIT_CODE);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!(
            "configuration propagation verified ({} keys captured)",
            snapshot.len()
        );
    }
    Ok(())
}
