//! Bidirectional middle snake search
//!
//! This module implements the divide step of Myers' shortest edit script
//! algorithm. Two greedy searches run simultaneously over a sub-range of the
//! token sequences: a forward search from the top-left corner of the edit
//! graph and a reverse search from the bottom-right corner. Each search
//! keeps, per diagonal, the furthest row it has reached with the current
//! number of edit operations, and extends every candidate path through runs
//! of equal tokens before recording it.
//!
//! The searches advance one round per edit operation. The instant a forward
//! path's reach on some diagonal meets or passes the reverse path's reach on
//! that diagonal, the run where they met is the middle snake: an optimal
//! split point that divides the problem into two strictly smaller
//! sub-problems. The meeting is tested on the forward pass when the combined
//! range length is odd and on the reverse pass when it is even, which is
//! what makes the returned edit length exact.
//!
//! ## Debug Logging
//!
//! Detailed search logging is enabled with the `debug_diff` feature flag
//! (`cargo build --features debug_diff`).

use crate::artifacts::diff::snake::{Snake, TokenId};

/// Macro for debug logging that is enabled with the debug_diff feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_diff"))]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Find the middle snake of `from[from_left..from_right]` versus
/// `to[to_left..to_right]`.
///
/// Returns the length of the shortest edit script for the sub-range and the
/// snake where the forward and reverse searches met. The snake may have
/// width zero, denoting a pure overlap point with no common run.
///
/// # Panics
///
/// Panics if the search space is exhausted without the two searches
/// meeting. For finite, correctly ordered ranges this cannot happen, so it
/// indicates a broken precondition rather than a recoverable condition.
pub(crate) fn find_middle_snake(
    from_tokens: &[TokenId],
    to_tokens: &[TokenId],
    from_left: usize,
    from_right: usize,
    to_left: usize,
    to_right: usize,
) -> (usize, Snake) {
    let from_size = from_right - from_left;
    let to_size = to_right - to_left;

    let total_size = from_size + to_size;
    let delta = from_size as isize - to_size as isize;
    let offset = (total_size + 1 + delta.unsigned_abs()) as isize;
    let is_odd = total_size % 2 == 1;

    // Furthest reach per diagonal, as offsets into the sub-range. The
    // reverse table starts past the end of the from range so unvisited
    // diagonals never satisfy the meeting test.
    let mut forward_reach = vec![0isize; 2 * offset as usize];
    let mut reverse_reach = vec![from_size as isize + 1; 2 * offset as usize];

    for script_size in 0..=(total_size + 1) / 2 {
        let script_size = script_size as isize;
        let mut lowest_diag = offset - script_size;
        let mut highest_diag = offset + script_size;

        debug_log!(
            "middle snake round {script_size}: diagonals {lowest_diag}..={highest_diag}"
        );

        // Forward pass
        let mut diagonal = lowest_diag;
        while diagonal <= highest_diag {
            let mut from_id = if diagonal == lowest_diag
                || (diagonal != highest_diag
                    && forward_reach[(diagonal - 1) as usize]
                        < forward_reach[(diagonal + 1) as usize])
            {
                forward_reach[(diagonal + 1) as usize]
            } else {
                forward_reach[(diagonal - 1) as usize] + 1
            };

            let mut to_id = from_id + offset - diagonal + to_left as isize;
            from_id += from_left as isize;
            let mut snake_width = 0usize;

            // Extend the path through the run of equal tokens
            while (from_id as usize) < from_right
                && (to_id as usize) < to_right
                && from_tokens[from_id as usize] == to_tokens[to_id as usize]
            {
                from_id += 1;
                to_id += 1;
                snake_width += 1;
            }

            forward_reach[diagonal as usize] = from_id - from_left as isize;

            // The searches met on this diagonal
            if is_odd
                && diagonal >= lowest_diag + delta + 1
                && diagonal <= highest_diag + delta - 1
                && forward_reach[diagonal as usize] >= reverse_reach[diagonal as usize]
            {
                debug_log!(
                    "forward paths met on diagonal {diagonal}: ses {}, snake width {snake_width}",
                    script_size * 2 - 1
                );
                return (
                    (script_size * 2 - 1) as usize,
                    Snake::new(
                        from_id as usize - snake_width,
                        to_id as usize - snake_width,
                        snake_width,
                    ),
                );
            }

            diagonal += 2;
        }

        // Reverse pass
        lowest_diag += delta;
        highest_diag += delta;
        let mut diagonal = lowest_diag;
        while diagonal <= highest_diag {
            let mut from_id = if diagonal == lowest_diag
                || (diagonal != highest_diag
                    && reverse_reach[(diagonal + 1) as usize]
                        <= reverse_reach[(diagonal - 1) as usize])
            {
                reverse_reach[(diagonal + 1) as usize] - 1
            } else {
                reverse_reach[(diagonal - 1) as usize]
            };

            let mut to_id = from_id + offset - diagonal + to_left as isize;
            from_id += from_left as isize;
            let mut snake_width = 0usize;

            // Extend the path backwards through the run of equal tokens
            while from_id > from_left as isize
                && to_id > to_left as isize
                && from_tokens[(from_id - 1) as usize] == to_tokens[(to_id - 1) as usize]
            {
                from_id -= 1;
                to_id -= 1;
                snake_width += 1;
            }

            reverse_reach[diagonal as usize] = from_id - from_left as isize;

            if !is_odd
                && diagonal >= lowest_diag - delta
                && diagonal <= highest_diag - delta
                && forward_reach[diagonal as usize] >= reverse_reach[diagonal as usize]
            {
                debug_log!(
                    "reverse paths met on diagonal {diagonal}: ses {}, snake width {snake_width}",
                    script_size * 2
                );
                return (
                    (script_size * 2) as usize,
                    Snake::new(from_id as usize, to_id as usize, snake_width),
                );
            }

            diagonal += 2;
        }
    }

    panic!("middle snake search exhausted its bound without the paths meeting");
}
