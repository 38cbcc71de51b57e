//! Character tokenizer
//!
//! One token per character unit, as cut by the parser mode. The vocabulary
//! grows in place while encoding.

use crate::artifacts::diff::snake::TokenId;
use crate::artifacts::tokenizer::splitter::split_chars;
use crate::artifacts::tokenizer::vocabulary::Vocabulary;
use crate::artifacts::tokenizer::{ParserMode, Tokenizer, UNKNOWN_TOKEN};
use std::path::Path;

pub struct CharacterTokenizer {
    parser_mode: ParserMode,
    vocabulary: Vocabulary,
}

impl CharacterTokenizer {
    pub fn new(parser_mode: ParserMode) -> Self {
        CharacterTokenizer {
            parser_mode,
            vocabulary: Vocabulary::with_reserved(&[UNKNOWN_TOKEN, " ", "\t", "\n"]),
        }
    }
}

impl Tokenizer for CharacterTokenizer {
    fn encode(&mut self, text: &str) -> Vec<TokenId> {
        split_chars(text, self.parser_mode)
            .iter()
            .map(|unit| self.vocabulary.insert(unit))
            .collect()
    }

    fn decode(&self, tokens: &[TokenId]) -> String {
        tokens
            .iter()
            .map(|&id| self.vocabulary.text_of(id).unwrap_or(UNKNOWN_TOKEN))
            .collect()
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
