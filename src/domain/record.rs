// ============================================================
// Layer 3 — Output Record Domain Types
// ============================================================
// The record shapes the reader produces for the training
// framework. Two variants exist because two downstream model
// architectures exist:
//
//   Paired       — models with separate premise / hypothesis
//                  encoders (e.g. ESIM-style). Two independent
//                  encoded fields.
//
//   Concatenated — sequence-pair models (BERT-style) that take
//                  one token sequence with a [SEP] marker at
//                  the sentence boundary. One encoded field:
//                  premise ++ [SEP] ++ hypothesis.
//
// Invariant: metadata ALWAYS holds the pre-concatenation token
// strings of both sentences, whichever variant was produced.
// The separator token must never appear in metadata.
//
// Reference: Devlin et al. (2019) - BERT paper (sentence pairs)

use serde::Serialize;

/// The reserved sentence-boundary marker inserted between the
/// premise and hypothesis in the Concatenated variant. Chosen
/// to match BERT convention; the whitespace tokenizer never
/// produces it from corpus text on its own.
pub const SEPARATOR_TOKEN: &str = "[SEP]";

// ─── EncodedField ─────────────────────────────────────────────────────────────
/// One token sequence indexed into the representation the
/// training framework embeds. Produced by a FieldEncoder.
///
/// `key` names the indexing scheme (default "tokens") so a
/// downstream embedder knows which lookup table to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedField {
    /// Name of the indexing scheme that produced the ids
    pub key: String,

    /// One id per token, in token order
    pub ids: Vec<u32>,
}

// ─── RecordMetadata ───────────────────────────────────────────────────────────
/// Human-readable echo of the tokenisation, attached to every
/// record. Holds the raw token strings BEFORE any concatenation,
/// so error analysis can always recover what the model saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordMetadata {
    pub premise_tokens:    Vec<String>,
    pub hypothesis_tokens: Vec<String>,
}

// ─── RecordFields ─────────────────────────────────────────────────────────────
/// The architecture-dependent part of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordFields {
    /// Independent fields for two-encoder architectures
    Paired {
        premise:    EncodedField,
        hypothesis: EncodedField,
    },

    /// Single joined field for sequence-pair architectures:
    /// premise tokens, one [SEP], hypothesis tokens
    Concatenated { premise_hypothesis: EncodedField },
}

// ─── NliRecord ────────────────────────────────────────────────────────────────
/// One fully built training/inference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NliRecord {
    /// Encoded model inputs, shaped per the configured variant
    pub fields: RecordFields,

    /// The gold label, when one exists. None supports
    /// inference-only use (no label key in the output JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Pre-concatenation token strings for both sentences
    pub metadata: RecordMetadata,
}

impl NliRecord {
    /// True if this record carries a gold label
    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }

    /// Total number of input token positions the model will see
    pub fn input_len(&self) -> usize {
        match &self.fields {
            RecordFields::Paired { premise, hypothesis } => {
                premise.ids.len() + hypothesis.ids.len()
            }
            RecordFields::Concatenated { premise_hypothesis } => {
                premise_hypothesis.ids.len()
            }
        }
    }
}
