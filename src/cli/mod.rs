// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `read`          — reads a jsonl corpus into records
//   2. `rename-shards` — renames split(1) shard files to
//                        language-coded names
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ReadArgs, RenameShardsArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "nli-corpus",
    version = "0.1.0",
    about = "Read MNLI/XNLI jsonl corpora into training records; rename XNLI shard files."
)]
pub struct Cli {
    /// The subcommand to run (read or rename-shards)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Read(args)         => Self::run_read(args),
            Commands::RenameShards(args) => Self::run_rename(args),
        }
    }

    /// Handles the `read` subcommand.
    /// Converts CLI args into a ReadConfig and hands off to Layer 2.
    fn run_read(args: ReadArgs) -> Result<()> {
        use crate::application::read_use_case::ReadUseCase;

        tracing::info!("Reading corpus: {}", args.path);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = ReadUseCase::new(args.into());
        let summary  = use_case.execute()?;

        // Preview records as JSON lines, then the pass summary
        for record in &summary.preview {
            println!("{}", serde_json::to_string(record)?);
        }
        println!(
            "Read complete: {} record(s), {} skipped without consensus, {} skipped over length.",
            summary.stats.kept,
            summary.stats.no_consensus,
            summary.stats.over_length,
        );
        Ok(())
    }

    /// Handles the `rename-shards` subcommand.
    fn run_rename(args: RenameShardsArgs) -> Result<()> {
        use crate::application::rename_use_case::RenameUseCase;

        let use_case = RenameUseCase::new(&args.dir);
        let report   = use_case.execute()?;

        println!(
            "Renamed {} shard file(s) in '{}'.",
            report.renamed, args.dir
        );
        Ok(())
    }
}
