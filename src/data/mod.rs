// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a jsonl file on disk and records the
// training framework can consume.
//
// The reading path flows in this order:
//
//   corpus path (file or URL)
//       │
//       ▼
//   PathResolver      → resolves URLs to a cached local copy
//       │
//       ▼
//   CorpusReader      → parses jsonl rows, filters, tokenizes
//       │
//       ▼
//   FieldEncoder      → token strings → indexed ids
//       │
//       ▼
//   NliRecord         → Paired or Concatenated variant
//       │
//       ▼
//   NliDataset        → implements Burn's Dataset trait
//
// The shard renamer (shards.rs) is independent of this flow —
// a one-shot migration aid for split(1) output files.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Streams labeled, tokenized examples from a jsonl corpus
pub mod reader;

/// Default whitespace word tokenizer
pub mod tokenizer;

/// Default single-id interning field encoder
pub mod encoder;

/// Implements Burn's Dataset trait for NLI records
pub mod dataset;

/// One-shot XNLI shard file renamer
pub mod shards;
