//! Tokenizer variants sharing one contract
//!
//! Every tokenizer turns text into an ordered sequence of token ids and
//! renders ids back to text through its own vocabulary:
//!
//! - `word`: words plus individual whitespace characters
//! - `character`: one token per character (or per byte, see [`ParserMode`])
//! - `whitespace`: whitespace-separated chunks
//! - `bpe`: byte-pair encoding over learned merge rules
//!
//! The word, character and whitespace tokenizers grow their vocabulary
//! lazily while encoding, which is why [`Tokenizer::encode`] requires
//! exclusive access. The BPE tokenizer never grows during encoding: its
//! vocabulary changes only through training or explicit merge rules, and
//! unseen tokens map to the reserved unknown id.

pub mod bpe;
pub mod character;
pub mod splitter;
pub mod vocabulary;
pub mod whitespace;
pub mod word;

use crate::artifacts::diff::snake::TokenId;
use crate::artifacts::tokenizer::bpe::BpeTokenizer;
use crate::artifacts::tokenizer::character::CharacterTokenizer;
use crate::artifacts::tokenizer::vocabulary::Vocabulary;
use crate::artifacts::tokenizer::whitespace::WhitespaceTokenizer;
use crate::artifacts::tokenizer::word::WordTokenizer;
use clap::ValueEnum;
use std::path::Path;

/// Text of the reserved unknown token, always mapped to id 0
pub const UNKNOWN_TOKEN: &str = "<unk>";

/// How raw input is cut into atomic units before tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ParserMode {
    /// Multi-byte UTF-8 characters are single units
    #[default]
    Utf8,
    /// Every byte stands alone, read as Latin-1
    Bytes,
}

/// Tokenizer variant selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TokenizerMode {
    Bpe,
    #[default]
    Word,
    Character,
    Whitespace,
}

/// Contract shared by all tokenizer variants.
///
/// `decode(encode(text))` round-trips for any text a variant actually
/// emits tokens for; the whitespace tokenizer normalizes whitespace runs
/// to single spaces and is the one deliberate exception.
pub trait Tokenizer {
    /// Encode text into an ordered token id sequence.
    ///
    /// Total: never fails. Variants that grow their vocabulary assign
    /// fresh ids to unseen tokens; the BPE variant maps them to the
    /// reserved unknown id instead.
    fn encode(&mut self, text: &str) -> Vec<TokenId>;

    /// Render token ids back to text. Unknown ids render as the reserved
    /// unknown token.
    fn decode(&self, tokens: &[TokenId]) -> String;

    /// The current vocabulary
    fn vocabulary(&self) -> &Vocabulary;

    /// Persist the vocabulary to a file
    fn save_vocabulary(&self, path: &Path) -> anyhow::Result<()>;

    /// Replace the vocabulary with one loaded from a file
    fn load_vocabulary(&mut self, path: &Path) -> anyhow::Result<()>;
}

/// Build the tokenizer for the given mode
pub fn create_tokenizer(mode: TokenizerMode, parser_mode: ParserMode) -> Box<dyn Tokenizer> {
    match mode {
        TokenizerMode::Bpe => Box::new(BpeTokenizer::new(parser_mode)),
        TokenizerMode::Word => Box::new(WordTokenizer::new(parser_mode)),
        TokenizerMode::Character => Box::new(CharacterTokenizer::new(parser_mode)),
        TokenizerMode::Whitespace => Box::new(WhitespaceTokenizer::new(parser_mode)),
    }
}
