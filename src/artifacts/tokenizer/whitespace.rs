//! Whitespace tokenizer
//!
//! Splits text into whitespace-separated chunks and drops the separators,
//! so decoding joins tokens with single spaces. Whitespace runs do not
//! round-trip; that is the point of this variant. The vocabulary grows in
//! place while encoding.

use crate::artifacts::diff::snake::TokenId;
use crate::artifacts::tokenizer::vocabulary::Vocabulary;
use crate::artifacts::tokenizer::{ParserMode, Tokenizer, UNKNOWN_TOKEN};
use regex::Regex;
use std::path::Path;

const CHUNK_PATTERN: &str = r"\S+";

pub struct WhitespaceTokenizer {
    chunk_pattern: Regex,
    vocabulary: Vocabulary,
}

impl WhitespaceTokenizer {
    pub fn new(_parser_mode: ParserMode) -> Self {
        WhitespaceTokenizer {
            chunk_pattern: Regex::new(CHUNK_PATTERN).expect("chunk pattern must compile"),
            vocabulary: Vocabulary::with_reserved(&[UNKNOWN_TOKEN]),
        }
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn encode(&mut self, text: &str) -> Vec<TokenId> {
        let chunk_pattern = &self.chunk_pattern;
        let vocabulary = &mut self.vocabulary;

        chunk_pattern
            .find_iter(text)
            .map(|chunk| vocabulary.insert(chunk.as_str()))
            .collect()
    }

    fn decode(&self, tokens: &[TokenId]) -> String {
        tokens
            .iter()
            .map(|&id| self.vocabulary.text_of(id).unwrap_or(UNKNOWN_TOKEN))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn save_vocabulary(&self, path: &Path) -> anyhow::Result<()> {
        self.vocabulary.save_to(path)
    }

    fn load_vocabulary(&mut self, path: &Path) -> anyhow::Result<()> {
        self.vocabulary.load_from(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::WhitespaceTokenizer;
    use crate::artifacts::tokenizer::{ParserMode, Tokenizer};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tokenizer() -> WhitespaceTokenizer {
        WhitespaceTokenizer::new(ParserMode::default())
    }

    #[rstest]
    fn basic_whitespace_tokenization(mut tokenizer: WhitespaceTokenizer) {
        let tokens = tokenizer.encode("hello world");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokenizer.decode(&tokens), "hello world");
    }

    #[rstest]
    fn whitespace_runs_collapse(mut tokenizer: WhitespaceTokenizer) {
        let tokens = tokenizer.encode("hello  world\ttest");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokenizer.decode(&tokens), "hello world test");
    }

    #[rstest]
    fn leading_and_trailing_whitespace_is_dropped(mut tokenizer: WhitespaceTokenizer) {
        let tokens = tokenizer.encode("  spaced  out  ");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokenizer.decode(&tokens), "spaced out");
    }
}
