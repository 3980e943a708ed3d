// ============================================================
// Layer 2 — ReadUseCase
// ============================================================
// Orchestrates one corpus-reading pass:
//
//   Step 1: Build the path resolver       (Layer 6 - infra)
//   Step 2: Build the tokenizer           (Layer 4 or 6)
//   Step 3: Build the CorpusReader        (Layer 4 - data)
//   Step 4: Consume the record stream     (Layer 4 - data)
//   Step 5: Wrap eager reads in a Dataset (Layer 4 - data)
//
// Returns a ReadSummary (counts + a record preview) for the
// CLI layer to present.

use anyhow::Result;
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::dataset::NliDataset;
use crate::data::reader::{CorpusReader, ReadStats, ReaderConfig};
use crate::domain::record::NliRecord;
use crate::infra::hf_tokenizer::HfTokenizer;
use crate::infra::resolver::CachingResolver;

// ─── Read Configuration ───────────────────────────────────────────────────────
// Everything one read pass needs, converted from CLI args.
// Serialisable so a run's configuration can be echoed/logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadConfig {
    /// Corpus path — local file or http(s) URL
    pub path: String,

    /// Produce the Concatenated record variant
    pub pair_sequence: bool,

    /// Skip examples with a sentence longer than this many words
    pub max_sentence_length: Option<usize>,

    /// Stream records instead of materialising them
    pub lazy: bool,

    /// How many records to include in the preview
    pub limit: usize,

    /// Optional HuggingFace tokenizer.json; whitespace
    /// tokenisation is used when absent
    pub tokenizer_file: Option<String>,

    /// Optional cache directory for remote corpora
    pub cache_dir: Option<String>,
}

/// The outcome of one read pass, for presentation by Layer 1
#[derive(Debug)]
pub struct ReadSummary {
    /// Filter counts for the whole pass
    pub stats: ReadStats,

    /// The first `limit` records, in corpus order
    pub preview: Vec<NliRecord>,
}

// ─── ReadUseCase ──────────────────────────────────────────────────────────────
pub struct ReadUseCase {
    config: ReadConfig,
}

impl ReadUseCase {
    pub fn new(config: ReadConfig) -> Self {
        Self { config }
    }

    /// Run the full read pass end to end
    pub fn execute(&self) -> Result<ReadSummary> {
        let cfg = &self.config;

        // ── Step 1: Path resolver ─────────────────────────────────────────────
        let resolver = match &cfg.cache_dir {
            Some(dir) => CachingResolver::new(dir),
            None      => CachingResolver::default(),
        };

        // ── Step 2 + 3: Reader with its collaborators ─────────────────────────
        let mut reader = CorpusReader::new(ReaderConfig {
            pair_sequence:       cfg.pair_sequence,
            max_sentence_length: cfg.max_sentence_length,
            lazy:                cfg.lazy,
        })
        .with_resolver(Box::new(resolver));

        if let Some(tok_file) = &cfg.tokenizer_file {
            let tokenizer = HfTokenizer::from_file(Path::new(tok_file))?;
            reader = reader.with_tokenizer(Box::new(tokenizer));
        }

        // ── Step 4: Consume the stream ────────────────────────────────────────
        if cfg.lazy {
            self.consume_lazy(&reader)
        } else {
            self.consume_eager(&reader)
        }
    }

    /// Lazy path: stream once, keeping only the preview in
    /// memory. Early termination is just "stop consuming", but
    /// the summary wants full-pass counts, so the stream is
    /// drained to the end.
    fn consume_lazy(&self, reader: &CorpusReader) -> Result<ReadSummary> {
        let mut iter    = reader.read(&self.config.path)?;
        let mut preview = Vec::new();

        for record in &mut iter {
            let record = record?;
            if preview.len() < self.config.limit {
                preview.push(record);
            }
        }

        let stats = iter.stats();
        tracing::info!("Streamed {} record(s)", stats.kept);
        Ok(ReadSummary { stats, preview })
    }

    /// Eager path: materialise everything, then wrap it in the
    /// framework Dataset and take the preview through that
    /// interface — the same calls a training loop would make.
    fn consume_eager(&self, reader: &CorpusReader) -> Result<ReadSummary> {
        let mut iter    = reader.read(&self.config.path)?;
        let mut records = Vec::new();
        for record in &mut iter {
            records.push(record?);
        }
        let stats = iter.stats();

        let dataset = NliDataset::new(records);
        tracing::info!(
            "Materialised dataset: {} record(s), {} labeled",
            dataset.len(),
            dataset.labeled_count(),
        );

        let preview = (0..self.config.limit.min(dataset.len()))
            .filter_map(|i| dataset.get(i))
            .collect();

        Ok(ReadSummary { stats, preview })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(name: &str) -> String {
        let rows = concat!(
            r#"{"gold_label": "entailment", "sentence1": "A man eats food", "sentence2": "A man eats"}"#, "\n",
            r#"{"gold_label": "-", "sentence1": "No", "sentence2": "consensus"}"#, "\n",
            r#"{"gold_label": "neutral", "sentence1": "The dog barks", "sentence2": "It is loud"}"#, "\n",
        );
        let path = std::env::temp_dir()
            .join(format!("nli_corpus_usecase_{}_{}", std::process::id(), name));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(rows.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn config(path: String, lazy: bool) -> ReadConfig {
        ReadConfig {
            path,
            pair_sequence:       false,
            max_sentence_length: None,
            lazy,
            limit:               1,
            tokenizer_file:      None,
            cache_dir:           None,
        }
    }

    #[test]
    fn test_lazy_and_eager_agree() {
        let path  = fixture("agree.jsonl");
        let lazy  = ReadUseCase::new(config(path.clone(), true)).execute().unwrap();
        let eager = ReadUseCase::new(config(path, false)).execute().unwrap();

        assert_eq!(lazy.stats.kept, 2);
        assert_eq!(eager.stats.kept, 2);
        assert_eq!(lazy.stats.no_consensus, 1);
        assert_eq!(lazy.preview, eager.preview);
    }

    #[test]
    fn test_preview_respects_limit() {
        let path    = fixture("limit.jsonl");
        let summary = ReadUseCase::new(config(path, false)).execute().unwrap();
        assert_eq!(summary.preview.len(), 1);
    }
}
