use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "imago",
    about = "Fuzzing front end for image decoders",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay corpus files or crash artifacts through the production harness
    Run {
        /// Input files, one invocation per file
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Verify configuration propagation without invoking the target
    Check {
        /// Print the captured snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}
