// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `read` and `rename-shards`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::read_use_case::ReadConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read an MNLI/XNLI jsonl corpus and print a summary
    Read(ReadArgs),

    /// Rename split(1) XNLI shard files to language-coded names
    RenameShards(RenameShardsArgs),
}

/// All arguments for the `read` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Corpus file to read — a local jsonl path or an
    /// http(s) URL previously placed in the cache
    #[arg(long)]
    pub path: String,

    /// Emit the single-sequence record variant
    /// (premise [SEP] hypothesis) for sequence-pair models
    /// instead of separate premise/hypothesis fields
    #[arg(long, default_value_t = false)]
    pub pair_sequence: bool,

    /// Skip examples where either sentence has more than this
    /// many whitespace-separated words
    #[arg(long)]
    pub max_sentence_length: Option<usize>,

    /// Stream records one at a time instead of materialising
    /// the whole corpus in memory
    #[arg(long, default_value_t = false)]
    pub lazy: bool,

    /// Print the first N records as JSON lines
    #[arg(long, default_value_t = 0)]
    pub limit: usize,

    /// Path to a HuggingFace tokenizer.json; whitespace word
    /// tokenisation is used when omitted
    #[arg(long)]
    pub tokenizer: Option<String>,

    /// Cache directory for remote corpora
    #[arg(long)]
    pub cache_dir: Option<String>,
}

/// Convert CLI ReadArgs into the application-layer ReadConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<ReadArgs> for ReadConfig {
    fn from(a: ReadArgs) -> Self {
        ReadConfig {
            path:                a.path,
            pair_sequence:       a.pair_sequence,
            max_sentence_length: a.max_sentence_length,
            lazy:                a.lazy,
            limit:               a.limit,
            tokenizer_file:      a.tokenizer,
            cache_dir:           a.cache_dir,
        }
    }
}

/// All arguments for the `rename-shards` command
#[derive(Args, Debug)]
pub struct RenameShardsArgs {
    /// Directory holding the shard files (non-recursive)
    #[arg(long, default_value = ".")]
    pub dir: String,
}
