//! Token vocabulary storage and persistence
//!
//! A vocabulary is a bijection between token texts and token ids, owned
//! independently by each tokenizer variant. Ids are assigned sequentially
//! in insertion order.
//!
//! ## File format
//!
//! One `token<TAB>id` line per entry. Backslash, tab, newline and carriage
//! return inside token texts are escaped so whitespace tokens survive the
//! round-trip. Lines starting with `#` are section markers or comments;
//! loading stops at the first marker so variant-specific sections (such as
//! the BPE merge rules) can follow the entries.

use crate::artifacts::diff::snake::TokenId;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    ids: HashMap<String, TokenId>,
    texts: HashMap<TokenId, String>,
    next_id: TokenId,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary seeded with reserved tokens at ids `0..n`
    pub fn with_reserved(reserved: &[&str]) -> Self {
        let mut vocabulary = Self::new();
        for token in reserved {
            vocabulary.insert(token);
        }
        vocabulary
    }

    /// Id of `text`, assigning the next free id if the token is unseen
    pub fn insert(&mut self, text: &str) -> TokenId {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }
        let id = self.next_id;
        self.ids.insert(text.to_string(), id);
        self.texts.insert(id, text.to_string());
        self.next_id += 1;
        id
    }

    pub fn id_of(&self, text: &str) -> Option<TokenId> {
        self.ids.get(text).copied()
    }

    pub fn text_of(&self, id: TokenId) -> Option<&str> {
        self.texts.get(&id).map(String::as_str)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.ids.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.ids.iter().map(|(text, &id)| (text.as_str(), id))
    }

    /// Render the entries in the vocabulary file format
    pub fn to_file_entries(&self) -> String {
        let mut entries = String::new();
        for (text, id) in self.iter() {
            entries.push_str(&format!("{}\t{}\n", escape(text), id));
        }
        entries
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_file_entries())
            .with_context(|| format!("failed to write vocabulary file: {}", path.display()))
    }

    /// Load entries from a vocabulary file, replacing the current content.
    ///
    /// Returns the remaining lines after the first `#` section marker so
    /// callers can parse variant-specific sections.
    pub fn load_from(&mut self, path: &Path) -> anyhow::Result<Vec<String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;

        self.ids.clear();
        self.texts.clear();
        self.next_id = 0;

        let mut remainder = Vec::new();
        let mut in_remainder = false;
        for line in content.lines() {
            if in_remainder {
                remainder.push(line.to_string());
                continue;
            }
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                in_remainder = true;
                remainder.push(line.to_string());
                continue;
            }

            let (text, id) = line
                .split_once('\t')
                .with_context(|| format!("malformed vocabulary entry: {line:?}"))?;
            let id: TokenId = id
                .parse()
                .with_context(|| format!("malformed token id in entry: {line:?}"))?;

            let text = unescape(text);
            self.ids.insert(text.clone(), id);
            self.texts.insert(id, text);
            self.next_id = self.next_id.max(id + 1);
        }

        Ok(remainder)
    }
}

pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub(crate) fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => unescaped.push('\t'),
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some(other) => unescaped.push(other),
            None => unescaped.push('\\'),
        }
    }
    unescaped
}
