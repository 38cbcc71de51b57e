//! Edit script derivation
//!
//! Turns the snake labeling into consumer-facing results: the linear
//! [`EditScript`], the token-level distance, the largest common
//! subsequence, and the positional identity check.

use crate::artifacts::diff::decomposition::{SnakeLabeling, UNLABELED};
use crate::artifacts::diff::snake::{EditScript, Replacement, TokenId};

/// Compute the shortest edit script transforming `from_tokens` into
/// `to_tokens`.
///
/// An empty sequence on either side short-circuits into a single
/// full-insert or full-delete replacement without running the
/// decomposition; two empty sequences produce an empty script.
pub fn shortest_edit_script(from_tokens: &[TokenId], to_tokens: &[TokenId]) -> EditScript {
    if from_tokens.is_empty() {
        if !to_tokens.is_empty() {
            return vec![Replacement::new(0, 0, 0, to_tokens.len())];
        }
        return vec![];
    }

    if to_tokens.is_empty() {
        return vec![Replacement::new(0, from_tokens.len(), 0, 0)];
    }

    let mut labeling = SnakeLabeling::new(from_tokens.len(), to_tokens.len());
    labeling.decompose_all(from_tokens, to_tokens);

    build_edit_script(from_tokens.len(), to_tokens.len(), &labeling)
}

/// Convert a labeling into a linear edit script.
///
/// Both labelings are scanned in lockstep. Unlabeled runs on either side
/// accumulate into one pending replacement; labeled runs advance both
/// sides together, but only across group ids that are equal by value. A
/// leading unlabeled run folds into the first replacement, and a trailing
/// unlabeled run on the to side after the from side is exhausted appends
/// one final pure insertion.
fn build_edit_script(from_len: usize, to_len: usize, labeling: &SnakeLabeling) -> EditScript {
    let from_groups = &labeling.from_groups;
    let to_groups = &labeling.to_groups;

    let mut script = EditScript::new();
    let mut to_id = 0;
    let mut from_id = 0;

    while from_id < from_len {
        let from_left = from_id;
        while from_id < from_len && from_groups[from_id] == UNLABELED {
            from_id += 1;
        }

        let to_left = to_id;
        while to_id < to_len
            && (from_id == from_len || to_groups[to_id] != from_groups[from_id])
        {
            to_id += 1;
        }

        if from_left != from_id || to_left != to_id {
            script.push(Replacement::new(from_left, from_id, to_left, to_id));
        }

        // Skip the rest of the matched runs on both sides
        while from_id + 1 < from_len && from_groups[from_id + 1] == from_groups[from_id] {
            from_id += 1;
        }
        while to_id + 1 < to_len && to_groups[to_id + 1] == to_groups[to_id] {
            to_id += 1;
        }

        from_id += 1;
        to_id += 1;
    }

    if to_id < to_len {
        script.push(Replacement::new(from_len, from_len, to_id, to_len));
    }

    script
}

/// Token-level edit distance derived from an edit script.
///
/// Sums the widths of both ranges of every replacement, charging 2 per
/// substituted token (one deletion plus one insertion), unlike the classic
/// single-edit substitution metric.
pub fn levenshtein_distance(script: &EditScript) -> usize {
    script
        .iter()
        .map(|replacement| replacement.removed() + replacement.added())
        .sum()
}

/// Positional equality check over the raw token sequences.
///
/// Independent of the diff machinery, short-circuiting on a length
/// mismatch.
pub fn are_identical(from_tokens: &[TokenId], to_tokens: &[TokenId]) -> bool {
    if from_tokens.len() != to_tokens.len() {
        return false;
    }

    from_tokens
        .iter()
        .zip(to_tokens)
        .all(|(from_token, to_token)| from_token == to_token)
}

/// Largest common subsequence of the two sequences, as the tokens of
/// `from_tokens` covered by the snake labeling.
pub fn largest_common_subsequence(
    from_tokens: &[TokenId],
    to_tokens: &[TokenId],
) -> Vec<TokenId> {
    if from_tokens.is_empty() || to_tokens.is_empty() {
        return vec![];
    }

    let mut labeling = SnakeLabeling::new(from_tokens.len(), to_tokens.len());
    labeling.decompose_all(from_tokens, to_tokens);

    from_tokens
        .iter()
        .zip(&labeling.from_groups)
        .filter(|&(_, &group)| group != UNLABELED)
        .map(|(&token, _)| token)
        .collect()
}
