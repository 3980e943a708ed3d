// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The reader depends on three external capabilities. Each is
// expressed as a trait so implementations can be swapped
// without changing the reader:
//
//   SentenceTokenizer — WhitespaceTokenizer (default)
//                       HfTokenizer (tokenizers crate)
//
//   FieldEncoder      — SingleIdEncoder (default)
//
//   PathResolver      — CachingResolver (local paths pass
//                       through; URLs map into a cache dir)
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system: the data layer programs
// against these traits and never names a concrete collaborator.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::record::EncodedField;

// ─── SentenceTokenizer ────────────────────────────────────────────────────────
/// Splits a sentence string into an ordered sequence of token
/// strings. An empty sentence tokenizes to an empty sequence —
/// that is a valid outcome, not an error.
pub trait SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

// ─── FieldEncoder ─────────────────────────────────────────────────────────────
/// Maps a token sequence plus a field name to the indexed
/// representation the training framework embeds.
///
/// The field name lets an encoder apply per-field schemes;
/// the default single-id encoder uses one shared vocabulary
/// for every field, mirroring common NLI setups where premise
/// and hypothesis share an embedding table.
pub trait FieldEncoder {
    fn encode(&self, tokens: &[String], field_name: &str) -> EncodedField;
}

// ─── PathResolver ─────────────────────────────────────────────────────────────
/// Resolves a corpus path — possibly a remote URL — to a local
/// file path the reader can open. Remote resolution/caching is
/// an external concern; implementations only decide WHERE a
/// cached copy lives, they do not download.
pub trait PathResolver {
    fn resolve(&self, path: &str) -> Result<PathBuf>;
}
