// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the system: what an NLI example IS, what a record IS,
// and the abstract capabilities the reader depends on.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - Only plain Rust structs, enums, and traits
//
// Keeping this layer pure means the record-building logic can
// be unit tested without touching the filesystem, the
// tokenizers crate, or the training framework.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One raw jsonl row as it appears on disk
pub mod example;

// The output record shapes handed to the training framework
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;
