//! Bounded-range search over the prefix sums, plus the reduction that folds
//! per-home candidates into one global best.
//!
//! Every end home is independent, which is what makes this half of the
//! pipeline data-parallel: workers take disjoint index chunks, fold a local
//! best, and the lane results are collected over a channel and merged under
//! the [`CandyRun`] total order, so arrival order does not matter.

use super::{CandyRun, merge_best};
use crate::input::RouteInput;
use anyhow::{Result, anyhow};
use crossbeam::channel::bounded;
use std::ops::Range;
use tracing::trace;

/// Best candidate run ending at home `end`, if any.
///
/// Three cases, mirroring how much of the prefix fits:
/// - the home alone busts the bag: no run ending here can qualify;
/// - the whole prefix fits: the maximal candidate is `[0, end]`;
/// - otherwise lower-bound binary search for the leftmost start whose
///   window still fits. The prefix sums are non-decreasing, so the window
///   total only shrinks as the start moves right, which makes the
///   predicate monotonic.
pub(crate) fn candidate_at(
    pieces: &[u32],
    prefix: &[u64],
    capacity: u64,
    end: usize,
) -> Option<CandyRun> {
    if u64::from(pieces[end]) > capacity {
        return None;
    }

    let total = prefix[end];
    if total <= capacity {
        if total == 0 {
            return None;
        }
        return Some(CandyRun { start: 0, end, pieces: total });
    }

    let mut lo = 0usize;
    let mut hi = end;
    let mut found: Option<CandyRun> = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let sum = total - if mid > 0 { prefix[mid - 1] } else { 0 };
        if sum > capacity {
            lo = mid + 1;
        } else {
            // Even an exact fit keeps looking left: zero-candy homes just
            // before `mid` carry the same sum with a smaller start.
            found = Some(CandyRun { start: mid, end, pieces: sum });
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        }
    }

    // A window of zero-candy homes fits but is not a run.
    found.filter(|run| run.pieces > 0)
}

/// Fold the candidates for a contiguous block of end homes.
fn best_run_over(
    pieces: &[u32],
    prefix: &[u64],
    capacity: u64,
    ends: Range<usize>,
) -> Option<CandyRun> {
    ends.fold(None, |best, end| {
        merge_best(best, candidate_at(pieces, prefix, capacity, end))
    })
}

/// Search every end home across a worker pool and reduce to one answer.
pub(crate) fn best_run_parallel(
    input: &RouteInput,
    prefix: &[u64],
    workers: usize,
) -> Result<Option<CandyRun>> {
    let pieces = input.pieces();
    let capacity = input.capacity();
    let n = pieces.len();
    if n == 0 {
        return Ok(None);
    }

    let workers = workers.clamp(1, n);
    if workers == 1 {
        return Ok(best_run_over(pieces, prefix, capacity, 0..n));
    }

    let chunk_len = n.div_ceil(workers);
    let (lane_tx, lane_rx) = bounded::<Option<CandyRun>>(workers);

    crossbeam::thread::scope(|s| {
        for worker in 0..workers {
            let lane_tx = lane_tx.clone();
            s.spawn(move |_| {
                let from = (worker * chunk_len).min(n);
                let to = ((worker + 1) * chunk_len).min(n);
                let local = best_run_over(pieces, prefix, capacity, from..to);
                trace!(worker, from, to, ?local, "search lane finished");
                let _ = lane_tx.send(local);
            });
        }
        drop(lane_tx);
    })
    .map_err(|_| anyhow!("Worker panic during candy-run search"))?;

    // Lanes finish in any order; the merge is a max under a total order,
    // so the fold is insensitive to arrival order.
    Ok(lane_rx.iter().fold(None, merge_best))
}
