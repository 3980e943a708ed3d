// ============================================================
// Layer 6 — HuggingFace Tokenizer Adapter
// ============================================================
// Wraps a tokenizers-crate Tokenizer (loaded from a standard
// tokenizer.json file) in the SentenceTokenizer trait, so a
// BERT-style subword tokenizer can replace the whitespace
// default without the data layer changing.
//
// encode() is called without special tokens: the reader owns
// sequence assembly (the [SEP] insertion in pair mode), so the
// tokenizer must not add its own [CLS]/[SEP] markers.
//
// Reference: Sennrich et al. (2016) BPE paper
//            tokenizers crate documentation

use anyhow::Result;
use std::path::Path;
use tokenizers::Tokenizer;

use crate::domain::traits::SentenceTokenizer;

pub struct HfTokenizer {
    inner: Tokenizer,
}

impl HfTokenizer {
    /// Load a tokenizer.json in HuggingFace format.
    /// tokenizers returns a boxed error without Send + Sync,
    /// so it is flattened into an anyhow message here.
    pub fn from_file(path: &Path) -> Result<Self> {
        let inner = Tokenizer::from_file(path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })?;

        tracing::info!("Loaded HuggingFace tokenizer from '{}'", path.display());
        Ok(Self { inner })
    }
}

impl SentenceTokenizer for HfTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        // add_special_tokens = false — see module header
        match self.inner.encode(text, false) {
            Ok(encoding) => encoding.get_tokens().to_vec(),
            Err(e) => {
                // The trait has no error channel; an unencodable
                // sentence degrades to an empty sequence, which
                // the reader already treats as valid
                tracing::warn!("Tokenisation failed, yielding no tokens: {}", e);
                Vec::new()
            }
        }
    }
}
