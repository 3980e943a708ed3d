// ============================================================
// Layer 4 — Single-Id Field Encoder
// ============================================================
// The default FieldEncoder: assigns each distinct token string
// a dense id in first-seen order and emits one id per token,
// keyed "tokens".
//
// Why interning instead of a fixed vocabulary?
//   The reader has no vocabulary-construction responsibility
//   (that is the training framework's job). First-seen
//   interning gives stable, reproducible ids for a given read
//   order without any external vocab file.
//
// Id stability matters for restartable reads: the map lives
// for the encoder's lifetime, so re-reading the same file
// through the same encoder yields identical ids.
//
// The Mutex makes encode() callable through &self from the
// reading path; contention is zero in this single-threaded
// pipeline.
//
// Reference: Rust Book §16 (Shared-State Concurrency)

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::record::EncodedField;
use crate::domain::traits::FieldEncoder;

/// Interns token strings to dense u32 ids, first-seen order.
/// One shared table serves every field name.
pub struct SingleIdEncoder {
    /// Scheme name stamped onto every EncodedField
    key: String,

    /// token string → id, grown on demand
    vocab: Mutex<HashMap<String, u32>>,
}

impl SingleIdEncoder {
    /// Create an encoder with the conventional "tokens" key
    pub fn new() -> Self {
        Self::with_key("tokens")
    }

    /// Create an encoder with a custom scheme key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key:   key.into(),
            vocab: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct tokens seen so far
    pub fn vocab_size(&self) -> usize {
        self.vocab.lock().map(|v| v.len()).unwrap_or(0)
    }
}

impl Default for SingleIdEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldEncoder for SingleIdEncoder {
    fn encode(&self, tokens: &[String], _field_name: &str) -> EncodedField {
        // lock() only fails if a previous holder panicked; this
        // encoder never panics while holding the lock, so the
        // poisoned state is unreachable in practice. Recover the
        // inner map either way rather than propagating a panic.
        let mut vocab = match self.vocab.lock() {
            Ok(guard)     => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let ids = tokens
            .iter()
            .map(|t| {
                let next = vocab.len() as u32;
                *vocab.entry(t.clone()).or_insert(next)
            })
            .collect();

        EncodedField { key: self.key.clone(), ids }
    }
}
