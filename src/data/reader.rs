// ============================================================
// Layer 4 — Corpus Reader
// ============================================================
// Streams labeled, tokenized examples from an MNLI/XNLI jsonl
// file into the record shape one of two downstream model
// architectures expects (see domain/record.rs).
//
// Per line, in order:
//   1. Parse the JSON object (malformed JSON or a missing key
//      is FATAL and propagated with the line number — there is
//      no per-line recovery; corpus files are expected to be
//      well-formed jsonl)
//   2. Skip rows with gold_label "-" (no annotator consensus)
//   3. Skip rows where either sentence exceeds
//      max_sentence_length whitespace-split words, when set
//   4. Tokenize both sentences and build one NliRecord
//
// Reads are restartable: every read() call opens the file
// fresh and carries no consumption state from earlier calls.
//
// The lazy flag chooses WHEN the work happens (streamed per
// consumption vs. materialised up front), never WHAT comes
// out — both paths produce the same records in the same order.
//
// Reference: Williams et al. (2018) - MNLI paper
//            Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use crate::data::encoder::SingleIdEncoder;
use crate::data::tokenizer::WhitespaceTokenizer;
use crate::domain::example::RawExample;
use crate::domain::record::{
    NliRecord, RecordFields, RecordMetadata, SEPARATOR_TOKEN,
};
use crate::domain::traits::{FieldEncoder, PathResolver, SentenceTokenizer};
use crate::infra::resolver::CachingResolver;

// ─── Reader Configuration ─────────────────────────────────────────────────────
/// All reader options, fixed for the reader's lifetime.
/// Collaborators (tokenizer, encoder, resolver) are configured
/// separately through the builder setters on CorpusReader.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// true  → Concatenated variant (premise [SEP] hypothesis)
    /// false → Paired variant (independent fields)
    pub pair_sequence: bool,

    /// When set, skip examples where either sentence has more
    /// than this many whitespace-split words. Measured on the
    /// raw string, BEFORE tokenisation.
    pub max_sentence_length: Option<usize>,

    /// true  → stream records per consumption
    /// false → materialise everything up front (the default)
    pub lazy: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            pair_sequence:       false,
            max_sentence_length: None,
            lazy:                false,
        }
    }
}

// ─── Read Statistics ──────────────────────────────────────────────────────────
/// Counts of what one read pass kept and filtered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadStats {
    /// Records yielded to the consumer
    pub kept: usize,

    /// Rows skipped for gold_label "-"
    pub no_consensus: usize,

    /// Rows skipped for exceeding max_sentence_length
    pub over_length: usize,
}

// ─── CorpusReader ─────────────────────────────────────────────────────────────
/// Reads one jsonl corpus file into NliRecords. Construct with
/// defaults, then override collaborators as needed:
///
///   let reader = CorpusReader::new(ReaderConfig::default())
///       .with_tokenizer(Box::new(my_tokenizer));
pub struct CorpusReader {
    config:    ReaderConfig,
    tokenizer: Box<dyn SentenceTokenizer>,
    encoder:   Box<dyn FieldEncoder>,
    resolver:  Box<dyn PathResolver>,
}

impl CorpusReader {
    /// Create a reader with the default collaborators:
    /// whitespace tokenizer, single-id "tokens" encoder, and
    /// the caching path resolver.
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            encoder:   Box::new(SingleIdEncoder::new()),
            resolver:  Box::new(CachingResolver::default()),
        }
    }

    /// Swap in a different tokenizer (e.g. the HuggingFace
    /// adapter from the infra layer)
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn SentenceTokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Swap in a different field encoder
    pub fn with_encoder(mut self, encoder: Box<dyn FieldEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Swap in a different path resolver
    pub fn with_resolver(mut self, resolver: Box<dyn PathResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// The configuration this reader was built with
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Open `path` (resolving URLs to a local cached copy) and
    /// return a lazy iterator of records. Each call opens the
    /// file fresh — no state is shared between reads.
    pub fn read(&self, path: &str) -> Result<RecordIter<'_>> {
        let local = self.resolver.resolve(path)?;

        tracing::info!("Reading NLI examples from jsonl corpus at: {}", local.display());

        let file = File::open(&local)
            .with_context(|| format!("Cannot open corpus file '{}'", local.display()))?;

        Ok(RecordIter {
            reader:  self,
            lines:   BufReader::new(file).lines(),
            line_no: 0,
            stats:   ReadStats::default(),
            failed:  false,
        })
    }

    /// Eagerly read the whole corpus into memory. The first
    /// fatal error (I/O or malformed line) aborts the read.
    pub fn read_all(&self, path: &str) -> Result<Vec<NliRecord>> {
        let mut iter    = self.read(path)?;
        let mut records = Vec::new();
        for record in &mut iter {
            records.push(record?);
        }

        let stats = iter.stats();
        tracing::debug!(
            "Read complete: {} kept, {} no-consensus, {} over-length",
            stats.kept,
            stats.no_consensus,
            stats.over_length,
        );
        Ok(records)
    }

    /// Build one record from a sentence pair. Public so callers
    /// doing inference can construct records directly from user
    /// input; `label=None` yields a record with no label field.
    pub fn build_record(
        &self,
        premise:    &str,
        hypothesis: &str,
        label:      Option<&str>,
    ) -> NliRecord {
        let premise_tokens    = self.tokenizer.tokenize(premise);
        let hypothesis_tokens = self.tokenizer.tokenize(hypothesis);

        // Metadata is captured from the per-sentence sequences
        // BEFORE any concatenation. The joined sequence below is
        // built in a separate buffer, so the [SEP] marker can
        // never leak into metadata.
        let metadata = RecordMetadata {
            premise_tokens:    premise_tokens.clone(),
            hypothesis_tokens: hypothesis_tokens.clone(),
        };

        let fields = if self.config.pair_sequence {
            // premise ++ [SEP] ++ hypothesis, exactly one marker
            let mut joined = premise_tokens;
            joined.push(SEPARATOR_TOKEN.to_string());
            joined.extend(hypothesis_tokens);

            RecordFields::Concatenated {
                premise_hypothesis: self.encoder.encode(&joined, "premise_hypothesis"),
            }
        } else {
            RecordFields::Paired {
                premise:    self.encoder.encode(&premise_tokens, "premise"),
                hypothesis: self.encoder.encode(&hypothesis_tokens, "hypothesis"),
            }
        };

        NliRecord {
            fields,
            label: label.map(str::to_string),
            metadata,
        }
    }
}

// ─── RecordIter ───────────────────────────────────────────────────────────────
/// Lazy record stream over one open corpus file. Yields
/// Result<NliRecord> so a malformed line surfaces as an Err;
/// after the first error the iterator is fused (returns None).
pub struct RecordIter<'a> {
    reader:  &'a CorpusReader,
    lines:   Lines<BufReader<File>>,
    line_no: usize,
    stats:   ReadStats,
    failed:  bool,
}

impl RecordIter<'_> {
    /// Filter counts for everything consumed so far
    pub fn stats(&self) -> ReadStats {
        self.stats
    }
}

impl Iterator for RecordIter<'_> {
    type Item = Result<NliRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e).context("I/O error while reading corpus"));
                }
            };
            self.line_no += 1;

            // Malformed JSON or a missing required key is fatal —
            // inherited behaviour; corpus files must be clean jsonl
            let example: RawExample = match serde_json::from_str(&line) {
                Ok(example) => example,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e).with_context(|| {
                        format!("Malformed jsonl on line {}", self.line_no)
                    }));
                }
            };

            // Annotators disagreed — no usable label, skip the row
            if !example.has_consensus() {
                self.stats.no_consensus += 1;
                tracing::debug!("line {}: skipped (no consensus)", self.line_no);
                continue;
            }

            // Length filter runs on raw whitespace word counts,
            // before any tokenisation work is spent on the row
            if let Some(max_len) = self.reader.config.max_sentence_length {
                if example.longest_sentence_words() > max_len {
                    self.stats.over_length += 1;
                    tracing::debug!("line {}: skipped (over {} words)", self.line_no, max_len);
                    continue;
                }
            }

            self.stats.kept += 1;
            return Some(Ok(self.reader.build_record(
                &example.sentence1,
                &example.sentence2,
                Some(&example.gold_label),
            )));
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// Three well-formed MNLI-style rows: entailment,
    /// no-consensus (must be dropped), contradiction
    const FIXTURE: &str = concat!(
        r#"{"gold_label": "entailment", "sentence1": "A man eats food", "sentence2": "A man eats"}"#, "\n",
        r#"{"gold_label": "-", "sentence1": "Ambiguous premise here", "sentence2": "Unclear hypothesis"}"#, "\n",
        r#"{"gold_label": "contradiction", "sentence1": "The cat sleeps on the warm mat", "sentence2": "The cat runs"}"#, "\n",
    );

    /// Write a fixture corpus to a unique temp path
    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("nli_corpus_reader_{}_{}", std::process::id(), name));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn reader(config: ReaderConfig) -> CorpusReader {
        CorpusReader::new(config)
    }

    #[test]
    fn test_no_consensus_rows_are_dropped() {
        let path    = write_fixture("consensus.jsonl", FIXTURE);
        let r       = reader(ReaderConfig::default());
        let records = r.read_all(path.to_str().unwrap()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label.as_deref(), Some("entailment"));
        assert_eq!(records[1].label.as_deref(), Some("contradiction"));
    }

    #[test]
    fn test_max_sentence_length_filters_either_sentence() {
        let path = write_fixture("length.jsonl", FIXTURE);

        // Premise of row 3 has 7 words → filtered at L=5;
        // row 1 (4-word premise, 3-word hypothesis) survives
        let r = reader(ReaderConfig {
            max_sentence_length: Some(5),
            ..ReaderConfig::default()
        });
        let records = r.read_all(path.to_str().unwrap()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label.as_deref(), Some("entailment"));
    }

    #[test]
    fn test_metadata_holds_raw_tokenisation_in_both_variants() {
        let expected_premise    = vec!["A", "man", "eats", "food"];
        let expected_hypothesis = vec!["A", "man", "eats"];

        for pair_sequence in [false, true] {
            let path = write_fixture("metadata.jsonl", FIXTURE);
            let r    = reader(ReaderConfig { pair_sequence, ..ReaderConfig::default() });
            let recs = r.read_all(path.to_str().unwrap()).unwrap();

            assert_eq!(recs[0].metadata.premise_tokens, expected_premise);
            assert_eq!(recs[0].metadata.hypothesis_tokens, expected_hypothesis);
        }
    }

    #[test]
    fn test_concatenated_variant_has_exactly_one_separator() {
        let r = reader(ReaderConfig { pair_sequence: true, ..ReaderConfig::default() });
        let record = r.build_record("A man eats food", "A man eats", Some("entailment"));

        let RecordFields::Concatenated { premise_hypothesis } = &record.fields else {
            panic!("expected Concatenated variant");
        };

        // 4 premise tokens + [SEP] + 3 hypothesis tokens
        assert_eq!(premise_hypothesis.ids.len(), 8);

        // The marker sits exactly at the premise/hypothesis
        // boundary (position 4). No corpus token is "[SEP]",
        // so its id must occur exactly once in the sequence.
        let marker_id = premise_hypothesis.ids[4];
        assert_eq!(
            premise_hypothesis.ids.iter().filter(|&&id| id == marker_id).count(),
            1
        );

        // Token order is preserved on both sides of the marker:
        // "A man eats" repeats in both sentences, so ids 0..3
        // reappear as ids 5..8
        assert_eq!(premise_hypothesis.ids[5..8], premise_hypothesis.ids[0..3]);
    }

    #[test]
    fn test_separator_never_leaks_into_metadata() {
        let r = reader(ReaderConfig { pair_sequence: true, ..ReaderConfig::default() });
        let record = r.build_record("one two", "three", Some("neutral"));

        assert_eq!(record.metadata.premise_tokens, vec!["one", "two"]);
        assert_eq!(record.metadata.hypothesis_tokens, vec!["three"]);
        assert!(!record.metadata.premise_tokens.iter().any(|t| t == SEPARATOR_TOKEN));
    }

    #[test]
    fn test_label_presence() {
        let r = reader(ReaderConfig::default());

        let labeled = r.build_record("a", "b", Some("neutral"));
        assert_eq!(labeled.label.as_deref(), Some("neutral"));

        let unlabeled = r.build_record("a", "b", None);
        assert!(unlabeled.label.is_none());
    }

    #[test]
    fn test_empty_sentence_is_not_an_error() {
        let r      = reader(ReaderConfig::default());
        let record = r.build_record("", "something", Some("neutral"));

        assert!(record.metadata.premise_tokens.is_empty());
        assert_eq!(record.metadata.hypothesis_tokens, vec!["something"]);
    }

    #[test]
    fn test_two_fresh_reads_yield_identical_sequences() {
        let path = write_fixture("roundtrip.jsonl", FIXTURE);
        let r    = reader(ReaderConfig::default());

        let first  = r.read_all(path.to_str().unwrap()).unwrap();
        let second = r.read_all(path.to_str().unwrap()).unwrap();

        // Same records, same order — the single-id encoder's
        // interned vocabulary persists across reads, so even
        // the encoded ids match
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let bad = concat!(
            r#"{"gold_label": "entailment", "sentence1": "ok", "sentence2": "ok"}"#, "\n",
            "{not json at all\n",
        );
        let path = write_fixture("malformed.jsonl", bad);
        let r    = reader(ReaderConfig::default());

        let err = r.read_all(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_lazy_iterator_tracks_stats() {
        let path = write_fixture("stats.jsonl", FIXTURE);
        let r    = reader(ReaderConfig {
            max_sentence_length: Some(5),
            lazy: true,
            ..ReaderConfig::default()
        });

        let mut iter = r.read(path.to_str().unwrap()).unwrap();
        while let Some(record) = iter.next() {
            record.unwrap();
        }

        let stats = iter.stats();
        assert_eq!(stats.kept, 1);
        assert_eq!(stats.no_consensus, 1);
        assert_eq!(stats.over_length, 1);
    }
}
