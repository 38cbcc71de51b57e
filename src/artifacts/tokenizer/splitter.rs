//! Shared text splitting helpers for the tokenizer variants

use crate::artifacts::tokenizer::ParserMode;

/// Split text into atomic character units.
///
/// In UTF-8 mode every `char` is one unit; in bytes mode every byte is one
/// unit, read as Latin-1.
pub(crate) fn split_chars(text: &str, parser_mode: ParserMode) -> Vec<String> {
    match parser_mode {
        ParserMode::Utf8 => text.chars().map(|c| c.to_string()).collect(),
        ParserMode::Bytes => text.bytes().map(|b| char::from(b).to_string()).collect(),
    }
}

/// Split text into words, keeping each whitespace character as its own
/// token so decoding can reproduce the input exactly.
pub(crate) fn split_words(text: &str, parser_mode: ParserMode) -> Vec<String> {
    let mut words = Vec::new();
    let mut current_word = String::new();

    for unit in split_chars(text, parser_mode) {
        if matches!(unit.as_str(), " " | "\t" | "\n" | "\r") {
            if !current_word.is_empty() {
                words.push(std::mem::take(&mut current_word));
            }
            words.push(unit);
        } else {
            current_word.push_str(&unit);
        }
    }

    if !current_word.is_empty() {
        words.push(current_word);
    }

    words
}
