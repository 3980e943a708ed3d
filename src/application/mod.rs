// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one user goal
// each (reading a corpus, renaming shard files).
//
// Rules for this layer:
//   - No UI or printing here (that's Layer 1)
//   - No parsing or filesystem detail (Layers 4 and 6)
//   - Only workflow coordination: build collaborators, run the
//     operation, hand results back up
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus-reading workflow
pub mod read_use_case;

// The shard-renaming workflow
pub mod rename_use_case;
