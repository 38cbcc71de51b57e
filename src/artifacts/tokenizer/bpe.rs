//! Byte-pair encoding tokenizer
//!
//! Words are split into character units and folded back together by
//! learned merge rules, applied in learning order. Unlike the other
//! variants the vocabulary never grows while encoding: tokens without a
//! vocabulary entry map to the reserved unknown id. The vocabulary changes
//! only through [`BpeTokenizer::train`], [`BpeTokenizer::add_merges`] or
//! [`Tokenizer::load_vocabulary`].

use crate::artifacts::diff::snake::TokenId;
use crate::artifacts::tokenizer::splitter::{split_chars, split_words};
use crate::artifacts::tokenizer::vocabulary::{Vocabulary, escape, unescape};
use crate::artifacts::tokenizer::{ParserMode, Tokenizer, UNKNOWN_TOKEN};
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

const RESERVED_TOKENS: [&str; 4] = [UNKNOWN_TOKEN, "<s>", "</s>", "<pad>"];
const MERGES_MARKER: &str = "# Merges";

pub struct BpeTokenizer {
    parser_mode: ParserMode,
    vocabulary: Vocabulary,
    merges: Vec<(String, String)>,
}

impl BpeTokenizer {
    pub fn new(parser_mode: ParserMode) -> Self {
        BpeTokenizer {
            parser_mode,
            vocabulary: Vocabulary::with_reserved(&RESERVED_TOKENS),
            merges: Vec::new(),
        }
    }

    pub fn merges(&self) -> &[(String, String)] {
        &self.merges
    }

    /// Learn merge rules from a corpus.
    ///
    /// Resets the vocabulary to the reserved tokens, seeds it with every
    /// character unit seen at least `min_frequency` times, then repeatedly
    /// merges the most frequent adjacent token pair until the vocabulary
    /// reaches `vocab_size` or no pair is frequent enough.
    pub fn train(&mut self, corpus: &[String], vocab_size: usize, min_frequency: usize) {
        self.vocabulary = Vocabulary::with_reserved(&RESERVED_TOKENS);
        self.merges.clear();

        let mut unit_counts: HashMap<String, usize> = HashMap::new();
        let mut tokenized_corpus: Vec<Vec<String>> = Vec::new();

        for text in corpus {
            let mut units = Vec::new();
            for word in split_words(text, self.parser_mode) {
                for unit in split_chars(&word, self.parser_mode) {
                    *unit_counts.entry(unit.clone()).or_default() += 1;
                    units.push(unit);
                }
            }
            tokenized_corpus.push(units);
        }

        for (unit, count) in &unit_counts {
            if *count >= min_frequency && !self.vocabulary.contains(unit) {
                self.vocabulary.insert(unit);
            }
        }

        while self.vocabulary.len() < vocab_size {
            let mut pair_counts: HashMap<(String, String), usize> = HashMap::new();
            for tokens in &tokenized_corpus {
                for pair in tokens.windows(2) {
                    *pair_counts
                        .entry((pair[0].clone(), pair[1].clone()))
                        .or_default() += 1;
                }
            }

            let mut best_pair: Option<(String, String)> = None;
            let mut best_count = 0;
            for (pair, count) in pair_counts {
                if count > best_count {
                    best_count = count;
                    best_pair = Some(pair);
                }
            }

            let Some((first, second)) = best_pair else {
                break;
            };
            if best_count < min_frequency {
                break;
            }

            let merged = format!("{first}{second}");
            if !self.vocabulary.contains(&merged) {
                self.vocabulary.insert(&merged);
                self.merges.push((first.clone(), second.clone()));
            }

            for tokens in &mut tokenized_corpus {
                fold_pair(tokens, &first, &second);
            }
        }
    }

    /// Install explicit merge rules, adding their parts and results to the
    /// vocabulary as needed
    pub fn add_merges(&mut self, merges: &[(String, String)]) {
        for (first, second) in merges {
            self.vocabulary.insert(first);
            self.vocabulary.insert(second);
            self.vocabulary.insert(&format!("{first}{second}"));
            self.merges.push((first.clone(), second.clone()));
        }
    }

    /// Split one word into character units and fold them by the learned
    /// merge rules, in learning order
    fn apply_merges(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return vec![];
        }

        let mut tokens = split_chars(word, self.parser_mode);
        for (first, second) in &self.merges {
            fold_pair(&mut tokens, first, second);
        }
        tokens
    }

    fn unknown_id(&self) -> TokenId {
        self.vocabulary.id_of(UNKNOWN_TOKEN).unwrap_or(0)
    }
}

/// Replace every adjacent `(first, second)` pair with the merged token,
/// re-examining the merged position so chains fold in one pass
fn fold_pair(tokens: &mut Vec<String>, first: &str, second: &str) {
    let mut id = 0;
    while id + 1 < tokens.len() {
        if tokens[id] == first && tokens[id + 1] == second {
            tokens[id] = format!("{first}{second}");
            tokens.remove(id + 1);
        } else {
            id += 1;
        }
    }
}

impl Tokenizer for BpeTokenizer {
    fn encode(&mut self, text: &str) -> Vec<TokenId> {
        let mut result = Vec::new();

        for word in split_words(text, self.parser_mode) {
            for token in self.apply_merges(&word) {
                match self.vocabulary.id_of(&token) {
                    Some(id) => result.push(id),
                    None => result.push(self.unknown_id()),
                }
            }
        }

        result
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
        let mut content = self.vocabulary.to_file_entries();
        content.push_str(MERGES_MARKER);
        content.push('\n');
        for (first, second) in &self.merges {
            content.push_str(&format!("{}\t{}\n", escape(first), escape(second)));
        }

        std::fs::write(path, content)
            .with_context(|| format!("failed to write vocabulary file: {}", path.display()))
    }

    fn load_vocabulary(&mut self, path: &Path) -> anyhow::Result<()> {
        let remainder = self.vocabulary.load_from(path)?;

        self.merges.clear();
        for line in remainder {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (first, second) = line
                .split_once('\t')
                .with_context(|| format!("malformed merge rule: {line:?}"))?;
            self.merges.push((unescape(first), unescape(second)));
        }

        Ok(())
    }
}
