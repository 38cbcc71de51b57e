//! Recursive snake decomposition
//!
//! The middle snake search splits one comparison problem into two smaller
//! ones. This module applies it recursively, labeling every matched run of
//! tokens across both sequences with a shared group id. Because the left
//! sub-problem is fully labeled before the snake and the snake before the
//! right sub-problem, group ids ascend strictly with scan position, which
//! is what lets the edit script builder walk both labelings in one linear
//! pass.
//!
//! Once the remaining edit length for a sub-range is 0 or 1 the recursion
//! bottoms out into a bounded linear scan: the shorter side is walked
//! against the longer one, a one-token skip is inserted on the longer side
//! at the single possible mismatch, and aligned matches receive fresh ids.

use crate::artifacts::diff::middle_snake::find_middle_snake;
use crate::artifacts::diff::snake::TokenId;

/// Sentinel group id for tokens not covered by any snake
pub const UNLABELED: i32 = -1;

/// Parallel group-id labelings of the two token sequences.
///
/// Each entry is either [`UNLABELED`] or a non-negative group id. All
/// tokens of one matched run share one id, the same id appears on both
/// sides, and ids ascend strictly from left to right on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeLabeling {
    pub from_groups: Vec<i32>,
    pub to_groups: Vec<i32>,
    next_group: i32,
}

impl SnakeLabeling {
    pub fn new(from_len: usize, to_len: usize) -> Self {
        SnakeLabeling {
            from_groups: vec![UNLABELED; from_len],
            to_groups: vec![UNLABELED; to_len],
            next_group: 0,
        }
    }

    /// Label the whole comparison problem.
    ///
    /// Equivalent to decomposing the full index ranges of both sequences.
    /// Callers are expected to have handled empty sequences beforehand.
    pub fn decompose_all(&mut self, from_tokens: &[TokenId], to_tokens: &[TokenId]) {
        self.decompose(
            from_tokens,
            to_tokens,
            0,
            from_tokens.len(),
            0,
            to_tokens.len(),
        );
    }

    /// Label `from[from_left..from_right]` against `to[to_left..to_right]`.
    fn decompose(
        &mut self,
        from_tokens: &[TokenId],
        to_tokens: &[TokenId],
        from_left: usize,
        from_right: usize,
        to_left: usize,
        to_right: usize,
    ) {
        let (ses_size, snake) =
            find_middle_snake(from_tokens, to_tokens, from_left, from_right, to_left, to_right);

        if ses_size > 1 {
            let (from_begin, to_begin) = snake.begin();
            let (from_end, to_end) = snake.end();

            self.decompose(from_tokens, to_tokens, from_left, from_begin, to_left, to_begin);

            for id in 0..snake.width() {
                self.from_groups[from_begin + id] = self.next_group;
                self.to_groups[to_begin + id] = self.next_group;
            }
            // Degenerate snakes never reserve a group id
            if snake.width() > 0 {
                self.next_group += 1;
            }

            self.decompose(from_tokens, to_tokens, from_end, from_right, to_end, to_right);
        } else if from_right - from_left < to_right - to_left {
            if from_right == from_left {
                return;
            }

            // At most one insertion remains: walk the from side against the
            // to side, skipping one to token at the single mismatch
            let mut shift = 0;
            for id in 0..from_right - from_left {
                if from_tokens[from_left + id] != to_tokens[to_left + id + shift] {
                    self.next_group += 1;
                    shift += 1;
                }
                self.from_groups[from_left + id] = self.next_group;
                self.to_groups[to_left + id + shift] = self.next_group;
            }
            self.next_group += 1;
        } else {
            if to_right == to_left {
                return;
            }

            // At most one deletion remains: same scan with the sides swapped
            let mut shift = 0;
            for id in 0..to_right - to_left {
                if id + shift < from_right - from_left
                    && from_tokens[from_left + id + shift] != to_tokens[to_left + id]
                {
                    self.next_group += 1;
                    shift += 1;
                }
                if id + shift < from_right - from_left {
                    self.from_groups[from_left + id + shift] = self.next_group;
                    self.to_groups[to_left + id] = self.next_group;
                }
            }
            self.next_group += 1;
        }
    }
}
