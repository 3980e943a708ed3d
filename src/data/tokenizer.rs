// ============================================================
// Layer 4 — Whitespace Tokenizer
// ============================================================
// The default SentenceTokenizer: splits on Unicode whitespace
// and peels leading/trailing punctuation off each word, so
// "eats." becomes ["eats", "."].
//
// This is deliberately simple — it exists so the reader works
// out of the box with no tokenizer file. Anything smarter
// (BPE, WordPiece) comes in through the HfTokenizer adapter
// in the infra layer.
//
// Note the contrast with the length filter in the reader:
// the filter counts `split(' ')` words on the RAW sentence,
// while this tokenizer may emit more tokens than that count
// (punctuation splits). The two measures are intentionally
// different and must not be conflated.

use crate::domain::traits::SentenceTokenizer;

/// Splits sentences into words on whitespace, separating edge
/// punctuation into its own tokens.
#[derive(Debug, Default, Clone)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split one whitespace-delimited word into up to three
    /// parts: leading punctuation, core, trailing punctuation.
    fn split_word(word: &str, out: &mut Vec<String>) {
        let core_start = word
            .char_indices()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, _)| i);

        // No alphanumeric core at all — emit each punctuation
        // character as its own token ("..." → ".", ".", ".")
        let Some(start) = core_start else {
            out.extend(word.chars().map(|c| c.to_string()));
            return;
        };

        let end = word
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(word.len());

        out.extend(word[..start].chars().map(|c| c.to_string()));
        out.push(word[start..end].to_string());
        out.extend(word[end..].chars().map(|c| c.to_string()));
    }
}

impl SentenceTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            Self::split_word(word, &mut tokens);
        }
        tokens
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("a man eats"), vec!["a", "man", "eats"]);
    }

    #[test]
    fn test_edge_punctuation_separated() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("He eats."), vec!["He", "eats", "."]);
        assert_eq!(t.tokenize("\"quoted\""), vec!["\"", "quoted", "\""]);
    }

    #[test]
    fn test_inner_punctuation_kept() {
        // Apostrophes inside a word stay attached
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_empty_sentence_gives_empty_sequence() {
        let t = WhitespaceTokenizer::new();
        assert!(t.tokenize("").is_empty());
        assert!(t.tokenize("   ").is_empty());
    }

    #[test]
    fn test_collapses_runs_of_spaces() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("a   b"), vec!["a", "b"]);
    }
}
