//! Diff report rendering
//!
//! Formats an edit script in the three classic `diff` report styles. The
//! renderer is stateless: it consumes the edit script, the two token
//! sequences and the tokenizer's decoding capability, and returns plain
//! text. Every format returns an empty string for an empty script.

use crate::artifacts::diff::snake::{EditScript, Replacement, TokenId};
use crate::artifacts::tokenizer::Tokenizer;
use clap::ValueEnum;
use std::fmt::Write;

/// Default number of context tokens shown around each change
pub const DEFAULT_CONTEXT_SIZE: usize = 3;

/// Report style selection, matching `diff`'s `-u`, `-c` and default output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DiffFormat {
    #[default]
    Unified,
    Context,
    Normal,
}

/// Context window of one replacement, clamped to the sequence bounds
struct ContextWindow {
    from_start: usize,
    from_end: usize,
    to_start: usize,
    to_end: usize,
}

impl ContextWindow {
    fn clamp(replacement: &Replacement, context_size: usize, from_len: usize, to_len: usize) -> Self {
        ContextWindow {
            from_start: replacement.from_left.saturating_sub(context_size),
            from_end: (replacement.from_right + context_size).min(from_len),
            to_start: replacement.to_left.saturating_sub(context_size),
            to_end: (replacement.to_right + context_size).min(to_len),
        }
    }
}

/// Render an edit script in the requested format
pub fn render_diff(
    script: &EditScript,
    from_tokens: &[TokenId],
    to_tokens: &[TokenId],
    tokenizer: &dyn Tokenizer,
    format: DiffFormat,
    context_size: usize,
) -> String {
    match format {
        DiffFormat::Unified => {
            format_unified(script, from_tokens, to_tokens, tokenizer, context_size)
        }
        DiffFormat::Context => {
            format_context(script, from_tokens, to_tokens, tokenizer, context_size)
        }
        DiffFormat::Normal => format_normal(script, from_tokens, to_tokens, tokenizer),
    }
}

fn decode_one(tokenizer: &dyn Tokenizer, token: TokenId) -> String {
    tokenizer.decode(&[token])
}

fn format_unified(
    script: &EditScript,
    from_tokens: &[TokenId],
    to_tokens: &[TokenId],
    tokenizer: &dyn Tokenizer,
    context_size: usize,
) -> String {
    if script.is_empty() {
        return String::new();
    }

    let mut result = String::new();
    result.push_str("--- a\n");
    result.push_str("+++ b\n");

    for replacement in script {
        let window =
            ContextWindow::clamp(replacement, context_size, from_tokens.len(), to_tokens.len());

        let _ = writeln!(
            result,
            "@@ -{},{} +{},{} @@",
            window.from_start + 1,
            window.from_end - window.from_start,
            window.to_start + 1,
            window.to_end - window.to_start,
        );

        for id in window.from_start..replacement.from_left {
            let _ = writeln!(result, " {}", decode_one(tokenizer, from_tokens[id]));
        }
        for id in replacement.from_left..replacement.from_right {
            let _ = writeln!(result, "-{}", decode_one(tokenizer, from_tokens[id]));
        }
        for id in replacement.to_left..replacement.to_right {
            let _ = writeln!(result, "+{}", decode_one(tokenizer, to_tokens[id]));
        }
        for id in replacement.from_right..window.from_end {
            let _ = writeln!(result, " {}", decode_one(tokenizer, from_tokens[id]));
        }
    }

    result
}

fn format_context(
    script: &EditScript,
    from_tokens: &[TokenId],
    to_tokens: &[TokenId],
    tokenizer: &dyn Tokenizer,
    context_size: usize,
) -> String {
    if script.is_empty() {
        return String::new();
    }

    let mut result = String::new();
    result.push_str("*** a\n");
    result.push_str("--- b\n");

    for replacement in script {
        let window =
            ContextWindow::clamp(replacement, context_size, from_tokens.len(), to_tokens.len());

        result.push_str("***************\n");

        let _ = writeln!(result, "*** {},{} ****", window.from_start + 1, window.from_end);
        for id in window.from_start..window.from_end {
            let marker = if id >= replacement.from_left && id < replacement.from_right {
                "- "
            } else {
                "  "
            };
            let _ = writeln!(result, "{marker}{}", decode_one(tokenizer, from_tokens[id]));
        }

        let _ = writeln!(result, "--- {},{} ----", window.to_start + 1, window.to_end);
        for id in window.to_start..window.to_end {
            let marker = if id >= replacement.to_left && id < replacement.to_right {
                "+ "
            } else {
                "  "
            };
            let _ = writeln!(result, "{marker}{}", decode_one(tokenizer, to_tokens[id]));
        }
    }

    result
}

fn format_normal(
    script: &EditScript,
    from_tokens: &[TokenId],
    to_tokens: &[TokenId],
    tokenizer: &dyn Tokenizer,
) -> String {
    if script.is_empty() {
        return String::new();
    }

    let mut result = String::new();

    for replacement in script {
        if replacement.from_left == replacement.from_right {
            // Pure insertion
            let _ = writeln!(
                result,
                "{}a{},{}",
                replacement.from_left,
                replacement.to_left + 1,
                replacement.to_right,
            );
            for id in replacement.to_left..replacement.to_right {
                let _ = writeln!(result, "> {}", decode_one(tokenizer, to_tokens[id]));
            }
        } else if replacement.to_left == replacement.to_right {
            // Pure deletion
            let _ = writeln!(
                result,
                "{},{}d{}",
                replacement.from_left + 1,
                replacement.from_right,
                replacement.to_left,
            );
            for id in replacement.from_left..replacement.from_right {
                let _ = writeln!(result, "< {}", decode_one(tokenizer, from_tokens[id]));
            }
        } else {
            // Substitution
            let _ = writeln!(
                result,
                "{},{}c{},{}",
                replacement.from_left + 1,
                replacement.from_right,
                replacement.to_left + 1,
                replacement.to_right,
            );
            for id in replacement.from_left..replacement.from_right {
                let _ = writeln!(result, "< {}", decode_one(tokenizer, from_tokens[id]));
            }
            result.push_str("---\n");
            for id in replacement.to_left..replacement.to_right {
                let _ = writeln!(result, "> {}", decode_one(tokenizer, to_tokens[id]));
            }
        }
    }

    result
}
