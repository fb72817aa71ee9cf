//! Single-pass sliding-window solver.
//!
//! O(n) time, O(1) extra space. Always correct on its own, and the
//! correctness reference the parallel pipeline is checked against.

use super::CandyRun;
use crate::input::RouteInput;

/// Two-pointer scan over the street.
///
/// The window grows one home at a time on the right; whenever the total
/// spills over the capacity, the left edge advances until it fits again.
/// The best-so-far update uses strict `>`, so among equal totals the run
/// discovered first is kept: smallest `end`, and for that `end` the
/// smallest `start` the capacity allows.
///
/// An all-zero street never records anything: a zero total is never
/// strictly greater than the initial best of zero, so the answer is `None`
/// even though empty-handed windows trivially fit the bag.
pub fn best_run(input: &RouteInput) -> Option<CandyRun> {
    let pieces = input.pieces();
    let capacity = input.capacity();

    let mut best: Option<CandyRun> = None;
    let mut start = 0usize;
    let mut sum = 0u64;

    for end in 0..pieces.len() {
        sum += u64::from(pieces[end]);

        if sum > capacity {
            // Shrink until the window fits; only the final step can land
            // at or below the capacity, and `start` never passes `end + 1`.
            while sum > capacity && start <= end {
                sum -= u64::from(pieces[start]);
                start += 1;
                if sum <= capacity {
                    record(&mut best, start, end, sum);
                }
            }
        } else {
            record(&mut best, start, end, sum);
        }
    }

    best
}

fn record(best: &mut Option<CandyRun>, start: usize, end: usize, pieces: u64) {
    let held = best.map_or(0, |run| run.pieces);
    if pieces > held {
        *best = Some(CandyRun { start, end, pieces });
    }
}
