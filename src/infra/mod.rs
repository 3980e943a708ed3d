// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that touch the outside world:
//
//   resolver.rs     — Corpus path resolution
//                     Maps local paths through unchanged and
//                     maps remote URLs to a deterministic slot
//                     in a local cache directory. Lookup-only:
//                     downloading is an external concern.
//
//   hf_tokenizer.rs — HuggingFace tokenizer adapter
//                     Loads a tokenizer.json with the
//                     tokenizers crate and exposes it through
//                     the SentenceTokenizer trait, so the data
//                     layer never sees tokenizers types.
//
// Keeping these behind the domain traits means the data layer
// can be tested with in-memory fakes and the implementations
// can be swapped (e.g. a resolver that actually downloads)
// without touching the reader.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Corpus path resolution and cache lookup
pub mod resolver;

/// tokenizers-crate adapter for the SentenceTokenizer trait
pub mod hf_tokenizer;
