// ============================================================
// Layer 3 — Raw Example Domain Type
// ============================================================
// Represents one line of an MNLI/XNLI jsonl file exactly as it
// appears on disk. This struct is ephemeral — it exists only
// during line-by-line parsing and is never handed downstream.
//
// The MNLI distribution uses these key names:
//   "gold_label" — the annotated relationship category
//   "sentence1"  — the premise
//   "sentence2"  — the hypothesis
//
// A gold_label of "-" means the five annotators did not reach
// a consensus. Those rows carry no usable supervision signal
// and are dropped during reading. It's about 800 out of 400k
// examples in the MNLI training set.
//
// Reference: Williams et al. (2018) - MNLI paper
//            Conneau et al. (2018) - XNLI paper

use serde::Deserialize;

/// The gold_label value marking an example without annotator
/// consensus. Such examples are skipped, never materialised.
pub const NO_CONSENSUS_LABEL: &str = "-";

/// One parsed jsonl row. All three keys are required —
/// a missing key is a fatal parse error, not a default.
#[derive(Debug, Clone, Deserialize)]
pub struct RawExample {
    /// Annotated relationship: entailment, contradiction,
    /// neutral, or "-" for no consensus
    pub gold_label: String,

    /// The premise sentence
    pub sentence1: String,

    /// The hypothesis sentence
    pub sentence2: String,
}

impl RawExample {
    /// True if the annotators agreed on a label.
    /// Rows without consensus are filtered out by the reader.
    pub fn has_consensus(&self) -> bool {
        self.gold_label != NO_CONSENSUS_LABEL
    }

    /// Word count of the longer of the two sentences, measured
    /// by splitting on single spaces — the same measure the
    /// max_sentence_length filter uses. Note this is deliberately
    /// `split(' ')`, not the tokenizer: the length filter runs
    /// BEFORE tokenisation so oversized rows are never tokenised.
    pub fn longest_sentence_words(&self) -> usize {
        let premise_words    = self.sentence1.split(' ').count();
        let hypothesis_words = self.sentence2.split(' ').count();
        premise_words.max(hypothesis_words)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn example(label: &str, s1: &str, s2: &str) -> RawExample {
        RawExample {
            gold_label: label.to_string(),
            sentence1:  s1.to_string(),
            sentence2:  s2.to_string(),
        }
    }

    #[test]
    fn test_consensus_detection() {
        assert!(example("entailment", "a", "b").has_consensus());
        assert!(!example("-", "a", "b").has_consensus());
    }

    #[test]
    fn test_longest_sentence_words() {
        let e = example("neutral", "one two three", "one two");
        assert_eq!(e.longest_sentence_words(), 3);
    }

    #[test]
    fn test_parses_mnli_row() {
        let line = r#"{"gold_label": "contradiction", "sentence1": "A man eats.", "sentence2": "Nobody eats.", "pairID": "123c"}"#;
        let e: RawExample = serde_json::from_str(line).unwrap();
        assert_eq!(e.gold_label, "contradiction");
        assert_eq!(e.sentence1, "A man eats.");
        // Extra keys like pairID are ignored by serde
        assert_eq!(e.sentence2, "Nobody eats.");
    }

    #[test]
    fn test_missing_key_is_fatal() {
        // sentence2 missing — deserialisation must fail, not default
        let line = r#"{"gold_label": "neutral", "sentence1": "A man eats."}"#;
        assert!(serde_json::from_str::<RawExample>(line).is_err());
    }
}
