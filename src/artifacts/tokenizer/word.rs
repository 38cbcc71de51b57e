//! Word tokenizer
//!
//! Splits text into words plus individual whitespace characters, so the
//! decoded output reproduces the input byte for byte. The vocabulary grows
//! in place while encoding.

use crate::artifacts::diff::snake::TokenId;
use crate::artifacts::tokenizer::splitter::split_words;
use crate::artifacts::tokenizer::vocabulary::Vocabulary;
use crate::artifacts::tokenizer::{ParserMode, Tokenizer, UNKNOWN_TOKEN};
use std::path::Path;

pub struct WordTokenizer {
    parser_mode: ParserMode,
    vocabulary: Vocabulary,
}

impl WordTokenizer {
    pub fn new(parser_mode: ParserMode) -> Self {
        WordTokenizer {
            parser_mode,
            vocabulary: Vocabulary::with_reserved(&[UNKNOWN_TOKEN, " ", "\t", "\n"]),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn encode(&mut self, text: &str) -> Vec<TokenId> {
        split_words(text, self.parser_mode)
            .iter()
            .map(|word| self.vocabulary.insert(word))
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

#[cfg(test)]
mod tests {
    use super::WordTokenizer;
    use crate::artifacts::tokenizer::{ParserMode, Tokenizer};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tokenizer() -> WordTokenizer {
        WordTokenizer::new(ParserMode::default())
    }

    #[rstest]
    fn basic_word_tokenization(mut tokenizer: WordTokenizer) {
        let tokens = tokenizer.encode("hello world");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokenizer.decode(&tokens), "hello world");
    }

    #[rstest]
    fn multiple_spaces_between_words(mut tokenizer: WordTokenizer) {
        let tokens = tokenizer.encode("hello  world");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokenizer.decode(&tokens), "hello  world");
    }

    #[rstest]
    fn punctuation_stays_attached_to_words(mut tokenizer: WordTokenizer) {
        let tokens = tokenizer.encode("hello, world!");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokenizer.decode(&tokens), "hello, world!");
    }

    #[rstest]
    fn repeated_words_reuse_their_id(mut tokenizer: WordTokenizer) {
        let tokens = tokenizer.encode("go go go");

        assert_eq!(tokens[0], tokens[2]);
        assert_eq!(tokens[0], tokens[4]);
    }

    #[rstest]
    fn decoding_an_unknown_id_renders_the_unknown_token(tokenizer: WordTokenizer) {
        assert_eq!(tokenizer.decode(&[999]), "<unk>");
    }
}
