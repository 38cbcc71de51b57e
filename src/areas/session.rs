//! The diff session
//!
//! A session owns one tokenizer, the two token sequences built from the
//! input texts, and the output writer. The sequences are encoded once at
//! construction and are read-only afterwards, so the derived edit script
//! is memoized on first use.

use crate::artifacts::diff::edit_script::{
    are_identical, largest_common_subsequence, levenshtein_distance, shortest_edit_script,
};
use crate::artifacts::diff::render::{DiffFormat, render_diff};
use crate::artifacts::diff::snake::{EditScript, TokenId};
use crate::artifacts::tokenizer::Tokenizer;
use std::cell::{RefCell, RefMut};

pub struct DiffSession {
    tokenizer: Box<dyn Tokenizer>,
    from_tokens: Vec<TokenId>,
    to_tokens: Vec<TokenId>,
    writer: RefCell<Box<dyn std::io::Write>>,
    edit_script: RefCell<Option<EditScript>>,
}

impl DiffSession {
    pub fn new(
        mut tokenizer: Box<dyn Tokenizer>,
        from_text: &str,
        to_text: &str,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        let from_tokens = tokenizer.encode(from_text);
        let to_tokens = tokenizer.encode(to_text);

        DiffSession {
            tokenizer,
            from_tokens,
            to_tokens,
            writer: RefCell::new(writer),
            edit_script: RefCell::new(None),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn from_tokens(&self) -> &[TokenId] {
        &self.from_tokens
    }

    pub fn to_tokens(&self) -> &[TokenId] {
        &self.to_tokens
    }

    /// The shortest edit script for the session's sequences, computed on
    /// first use
    pub fn shortest_edit_script(&self) -> EditScript {
        self.edit_script
            .borrow_mut()
            .get_or_insert_with(|| shortest_edit_script(&self.from_tokens, &self.to_tokens))
            .clone()
    }

    pub fn are_identical(&self) -> bool {
        are_identical(&self.from_tokens, &self.to_tokens)
    }

    pub fn levenshtein_distance(&self) -> usize {
        levenshtein_distance(&self.shortest_edit_script())
    }

    pub fn largest_common_subsequence(&self) -> Vec<TokenId> {
        largest_common_subsequence(&self.from_tokens, &self.to_tokens)
    }

    pub fn render_diff(&self, format: DiffFormat, context_size: usize) -> String {
        render_diff(
            &self.shortest_edit_script(),
            &self.from_tokens,
            &self.to_tokens,
            self.tokenizer.as_ref(),
            format,
            context_size,
        )
    }
}
